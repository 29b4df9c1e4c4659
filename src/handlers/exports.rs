// src/handlers/exports.rs

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError, config::AppState, middleware::auth::AuthenticatedProfile,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    // "YYYY-MM"; ausente usa o mês corrente
    pub month: Option<String>,
}

fn month_or_current(month: Option<String>) -> String {
    month.unwrap_or_else(|| Utc::now().format("%Y-%m").to_string())
}

// GET /api/exports/reports.csv
#[utoipa::path(
    get,
    path = "/api/exports/reports.csv",
    tag = "Exports",
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV dos relatórios aprovados do mês", content_type = "text/csv"),
        (status = 403, description = "Restrito à direção nacional")
    ),
    security(("api_jwt" = []))
)]
pub async fn export_reports_csv(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let month = month_or_current(query.month);
    let (filename, body) = app_state.export_service.monthly_csv(&actor, &month).await?;

    let disposition = format!("attachment; filename=\"{}\"", filename);
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (header::CONTENT_DISPOSITION, disposition.as_str()),
    ];
    Ok((headers, body).into_response())
}

// GET /api/exports/national-report.pdf
#[utoipa::path(
    get,
    path = "/api/exports/national-report.pdf",
    tag = "Exports",
    params(ExportQuery),
    responses(
        (status = 200, description = "PDF do relatório nacional do mês", content_type = "application/pdf"),
        (status = 403, description = "Restrito à direção nacional")
    ),
    security(("api_jwt" = []))
)]
pub async fn export_national_pdf(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let month = month_or_current(query.month);
    let (filename, bytes) = app_state
        .export_service
        .national_pdf(&actor, &month)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", filename);
    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (header::CONTENT_DISPOSITION, disposition.as_str()),
    ];
    Ok((headers, bytes).into_response())
}
