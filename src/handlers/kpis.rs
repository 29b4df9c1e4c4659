// src/handlers/kpis.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{common::error::AppError, config::AppState, models::kpi::PublicKpis};

#[derive(Debug, Deserialize, IntoParams)]
pub struct KpiQuery {
    // "YYYY-MM"; ausente devolve o mês mais recente com dados
    pub month: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    // Quantos meses de histórico (padrão 6)
    pub months: Option<i64>,
}

// GET /api/kpis
#[utoipa::path(
    get,
    path = "/api/kpis",
    tag = "Public KPIs",
    params(KpiQuery),
    responses(
        (status = 200, description = "Totais aprovados do mês (null sem dados)", body = Option<PublicKpis>)
    )
)]
pub async fn get_public_kpis(
    State(app_state): State<AppState>,
    Query(query): Query<KpiQuery>,
) -> Result<impl IntoResponse, AppError> {
    let kpis = app_state
        .kpi_service
        .public_kpis(query.month.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(kpis)))
}

// GET /api/kpis/history
#[utoipa::path(
    get,
    path = "/api/kpis/history",
    tag = "Public KPIs",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Histórico mensal em ordem cronológica", body = Vec<PublicKpis>)
    )
)]
pub async fn get_kpi_history(
    State(app_state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let history = app_state
        .kpi_service
        .history(query.months.unwrap_or(6))
        .await?;
    Ok((StatusCode::OK, Json(history)))
}
