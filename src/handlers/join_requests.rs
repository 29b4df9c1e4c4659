// src/handlers/join_requests.rs

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::join::{JoinRequest, JoinRequestPayload, JoinReviewPayload},
};

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

// POST /api/join-requests
#[utoipa::path(
    post,
    path = "/api/join-requests",
    tag = "Join Requests",
    request_body = JoinRequestPayload,
    responses(
        (status = 201, description = "Pedido de adesão registrado", body = JoinRequest),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_join_request(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    payload.validate_consistency().map_err(|e| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("requestType", e);
        AppError::ValidationError(errors)
    })?;

    // O formulário é público, mas se veio um token válido o pedido
    // fica vinculado ao perfil. Token ruim não bloqueia o envio.
    let user_id = match bearer_token(&headers) {
        Some(token) => app_state
            .auth_service
            .validate_token(token)
            .await
            .ok()
            .map(|profile| profile.id),
        None => None,
    };

    let request = app_state.join_service.create(user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

// GET /api/admin/join-requests
#[utoipa::path(
    get,
    path = "/api/admin/join-requests",
    tag = "Join Requests",
    responses(
        (status = 200, description = "Todos os pedidos, mais recentes primeiro", body = Vec<JoinRequest>),
        (status = 403, description = "Restrito à direção nacional")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_join_requests(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.join_service.list(&actor).await?;
    Ok((StatusCode::OK, Json(requests)))
}

// POST /api/admin/join-requests/{id}/review
#[utoipa::path(
    post,
    path = "/api/admin/join-requests/{id}/review",
    tag = "Join Requests",
    request_body = JoinReviewPayload,
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido aprovado ou recusado", body = JoinRequest),
        (status = 403, description = "Restrito à direção nacional"),
        (status = 409, description = "Pedido já revisado")
    ),
    security(("api_jwt" = []))
)]
pub async fn review_join_request(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<JoinReviewPayload>,
) -> Result<impl IntoResponse, AppError> {
    let request = app_state.join_service.review(&actor, id, &payload).await?;
    Ok((StatusCode::OK, Json(request)))
}
