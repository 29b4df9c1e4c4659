// src/handlers/media.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::media::{CreateMediaPayload, MediaFilter, MediaItem},
};

// GET /api/media
#[utoipa::path(
    get,
    path = "/api/media",
    tag = "Media",
    params(MediaFilter),
    responses(
        (status = 200, description = "Galeria pública (somente itens com consentimento)", body = Vec<MediaItem>)
    )
)]
pub async fn list_public_media(
    State(app_state): State<AppState>,
    Query(filter): Query<MediaFilter>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.media_service.list_public(&filter).await?;
    Ok((StatusCode::OK, Json(items)))
}

// GET /api/admin/media
#[utoipa::path(
    get,
    path = "/api/admin/media",
    tag = "Media",
    params(MediaFilter),
    responses(
        (status = 200, description = "Todos os itens, inclusive sem consentimento", body = Vec<MediaItem>),
        (status = 403, description = "Restrito à equipe de mídia")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_all_media(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Query(filter): Query<MediaFilter>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.media_service.list_all(&actor, &filter).await?;
    Ok((StatusCode::OK, Json(items)))
}

// POST /api/admin/media
#[utoipa::path(
    post,
    path = "/api/admin/media",
    tag = "Media",
    request_body = CreateMediaPayload,
    responses(
        (status = 201, description = "Item publicado", body = MediaItem),
        (status = 403, description = "Restrito à equipe de mídia")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_media(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Json(payload): Json<CreateMediaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state.media_service.create(&actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// DELETE /api/admin/media/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/media/{id}",
    tag = "Media",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 204, description = "Item removido"),
        (status = 403, description = "Restrito à equipe de mídia"),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_media(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.media_service.delete(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
