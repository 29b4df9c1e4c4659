// src/handlers/profiles.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::auth::{Profile, RoleOption, UpdateRolePayload},
};

// GET /api/profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "Profiles",
    responses(
        (status = 200, description = "Todos os perfis cadastrados", body = Vec<Profile>),
        (status = 403, description = "Restrito à direção nacional")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_profiles(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let profiles = app_state.auth_service.list_profiles(&actor).await?;
    Ok((StatusCode::OK, Json(profiles)))
}

// GET /api/profiles/roles
#[utoipa::path(
    get,
    path = "/api/profiles/roles",
    tag = "Profiles",
    responses(
        (status = 200, description = "Papéis atribuíveis e seus rótulos", body = Vec<RoleOption>),
        (status = 403, description = "Restrito à direção nacional")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_role_options(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let options = app_state.auth_service.role_options(&actor)?;
    Ok((StatusCode::OK, Json(options)))
}

// PATCH /api/profiles/{id}/role
#[utoipa::path(
    patch,
    path = "/api/profiles/{id}/role",
    tag = "Profiles",
    request_body = UpdateRolePayload,
    params(("id" = Uuid, Path, description = "ID do perfil")),
    responses(
        (status = 200, description = "Papel atualizado", body = Profile),
        (status = 403, description = "Somente administradores"),
        (status = 404, description = "Perfil não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_profile_role(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state
        .auth_service
        .change_role(&actor, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(profile)))
}
