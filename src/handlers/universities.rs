// src/handlers/universities.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::university::University};

// GET /api/universities
#[utoipa::path(
    get,
    path = "/api/universities",
    tag = "Universities",
    responses(
        (status = 200, description = "Universidades por região, para o formulário e o mapa", body = Vec<University>)
    )
)]
pub async fn list_universities(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let universities = app_state.university_service.list().await?;
    Ok((StatusCode::OK, Json(universities)))
}
