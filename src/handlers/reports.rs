// src/handlers/reports.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::report::{MonthlyReport, ReportPayload, ReportStatus, ReviewPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportListQuery {
    pub month: Option<String>,
    pub status: Option<ReportStatus>,
    pub region: Option<String>,
}

// POST /api/reports
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "Reports",
    request_body = ReportPayload,
    responses(
        (status = 201, description = "Relatório criado (rascunho ou enviado)", body = MonthlyReport),
        (status = 400, description = "Payload inválido"),
        (status = 409, description = "Já existe relatório desse mês para esse campus")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_report(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Json(payload): Json<ReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let report = app_state.report_service.create(&actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

// GET /api/reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    params(ReportListQuery),
    responses(
        (status = 200, description = "Relatórios visíveis para o papel do chamador", body = Vec<MonthlyReport>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_reports(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Query(query): Query<ReportListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reports = app_state
        .report_service
        .list(
            &actor,
            query.month.as_deref(),
            query.status,
            query.region.as_deref(),
        )
        .await?;
    Ok((StatusCode::OK, Json(reports)))
}

// GET /api/reports/{id}
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "Reports",
    params(("id" = Uuid, Path, description = "ID do relatório")),
    responses(
        (status = 200, description = "Relatório encontrado", body = MonthlyReport),
        (status = 404, description = "Inexistente ou fora do escopo do chamador")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_report(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.report_service.get(&actor, id).await?;
    Ok((StatusCode::OK, Json(report)))
}

// PUT /api/reports/{id}
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    tag = "Reports",
    request_body = ReportPayload,
    params(("id" = Uuid, Path, description = "ID do relatório")),
    responses(
        (status = 200, description = "Relatório atualizado", body = MonthlyReport),
        (status = 403, description = "Chamador não pode editar este relatório"),
        (status = 409, description = "Transição de status inválida ou edição concorrente")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_report(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let report = app_state
        .report_service
        .update(&actor, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(report)))
}

// POST /api/reports/{id}/review
#[utoipa::path(
    post,
    path = "/api/reports/{id}/review",
    tag = "Reports",
    request_body = ReviewPayload,
    params(("id" = Uuid, Path, description = "ID do relatório")),
    responses(
        (status = 200, description = "Relatório aprovado ou devolvido", body = MonthlyReport),
        (status = 403, description = "Chamador não pode revisar esta região"),
        (status = 409, description = "Relatório não está enviado ou já foi revisado")
    ),
    security(("api_jwt" = []))
)]
pub async fn review_report(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    // Rejeição sem comentário não passa
    payload.validate_consistency().map_err(|e| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("comment", e);
        AppError::ValidationError(errors)
    })?;

    let report = app_state
        .report_service
        .review(&actor, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(report)))
}
