// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::kpi::{ComplianceResponse, ReportAggregates},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthQuery {
    // "YYYY-MM"; ausente usa o mês corrente
    pub month: Option<String>,
}

fn month_or_current(month: Option<String>) -> String {
    month.unwrap_or_else(|| Utc::now().format("%Y-%m").to_string())
}

// GET /api/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    params(MonthQuery),
    responses(
        (status = 200, description = "Contagens, totais e quadros do mês, no escopo do papel", body = ReportAggregates)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_stats(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let month = month_or_current(query.month);
    let aggregates = app_state.kpi_service.dashboard(&actor, &month).await?;
    Ok((StatusCode::OK, Json(aggregates)))
}

// GET /api/dashboard/compliance
#[utoipa::path(
    get,
    path = "/api/dashboard/compliance",
    tag = "Dashboard",
    params(MonthQuery),
    responses(
        (status = 200, description = "Percentual de líderes que já enviaram o mês", body = ComplianceResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_compliance(
    State(app_state): State<AppState>,
    AuthenticatedProfile(_actor): AuthenticatedProfile,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let month = month_or_current(query.month);
    let compliance = app_state.kpi_service.compliance(&month).await;
    Ok((StatusCode::OK, Json(compliance)))
}
