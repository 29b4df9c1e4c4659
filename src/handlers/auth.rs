// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::auth::{AuthResponse, LoginPayload, Profile, RegisterPayload, UpdateProfilePayload},
};

// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Perfil criado; devolve o token JWT", body = AuthResponse),
        (status = 400, description = "Payload inválido"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state.auth_service.register(&payload).await?;
    Ok((StatusCode::CREATED, Json(AuthResponse { token })))
}

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login bem-sucedido", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;
    Ok((StatusCode::OK, Json(AuthResponse { token })))
}

// GET /api/me
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Perfil do portador do token", body = Profile),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedProfile(profile): AuthenticatedProfile) -> Json<Profile> {
    Json(profile)
}

// PATCH /api/me
#[utoipa::path(
    patch,
    path = "/api/me",
    tag = "Auth",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = Profile),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_me(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let updated = app_state
        .auth_service
        .update_own_profile(profile.id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(updated)))
}

// POST /api/auth/bootstrap-admin
#[utoipa::path(
    post,
    path = "/api/auth/bootstrap-admin",
    tag = "Auth",
    responses(
        (status = 200, description = "Chamador promovido a administrador", body = Profile),
        (status = 401, description = "Não autorizado"),
        (status = 409, description = "Já existe um administrador")
    ),
    security(("api_jwt" = []))
)]
pub async fn bootstrap_admin(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let promoted = app_state.auth_service.bootstrap_admin(&profile).await?;
    Ok((StatusCode::OK, Json(promoted)))
}
