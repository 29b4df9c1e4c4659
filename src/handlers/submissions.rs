// src/handlers/submissions.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::submission::{Submission, SubmissionPayload},
};

// POST /api/submissions
#[utoipa::path(
    post,
    path = "/api/submissions",
    tag = "Submissions",
    request_body = SubmissionPayload,
    responses(
        (status = 201, description = "Mensagem de contato registrada", body = Submission),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_submission(
    State(app_state): State<AppState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let submission = app_state.submission_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

// GET /api/admin/submissions
#[utoipa::path(
    get,
    path = "/api/admin/submissions",
    tag = "Submissions",
    responses(
        (status = 200, description = "Mensagens recebidas, mais recentes primeiro", body = Vec<Submission>),
        (status = 403, description = "Restrito à direção nacional")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_submissions(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let submissions = app_state.submission_service.list(&actor).await?;
    Ok((StatusCode::OK, Json(submissions)))
}
