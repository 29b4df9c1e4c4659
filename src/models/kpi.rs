// src/models/kpi.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::report::SocialPlatform;

// --- Agregados do dashboard ---

// Contagem de relatórios por status. "pending" é um apelido de
// "submitted" que o painel usa para a fila de revisão.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: i64,
    pub draft: i64,
    pub submitted: i64,
    pub approved: i64,
    pub rejected: i64,
    pub pending: i64,
}

// Totais nacionais somados apenas sobre relatórios aprovados
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NationalTotals {
    pub universities_reached: i64,
    pub tracts_given: i64,
    pub souls_saved: i64,
    pub integrations_count: i64,
    pub meetings_count: i64,
    pub hours_invested: i64,
    pub literature_count: i64,
    pub prayer_hours: i64,
    #[schema(example = "1250.00")]
    pub literature_money: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBreakdownEntry {
    #[schema(example = "Kigali")]
    pub region: String,
    pub reports: i64,
    pub universities: i64,
    pub souls: i64,
    pub tracts: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBreakdownEntry {
    pub platform: SocialPlatform,
    #[schema(example = "YouTube")]
    pub label: String,
    pub uploads: i64,
}

// Resultado completo da agregação de um lote de relatórios
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportAggregates {
    pub counts: StatusCounts,
    pub totals: NationalTotals,
    pub by_region: Vec<RegionalBreakdownEntry>,
    pub by_platform: Vec<PlatformBreakdownEntry>,
}

// --- KPIs públicos ---

// Uma linha da view public_kpis: totais aprovados de um mês.
// Alimenta a página inicial e os gráficos de histórico.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicKpis {
    #[schema(example = "2026-04")]
    pub month: String,
    pub universities_reached: i64,
    pub tracts_given: i64,
    pub souls_saved: i64,
    pub integrations: i64,
    pub meetings: i64,
    pub hours_invested: i64,
    pub prayer_hours: i64,
    pub literature_count: i64,
    #[schema(example = "1250.00")]
    pub literature_money: Decimal,
}

// Resposta do indicador de conformidade (percentual inteiro 0..=100)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResponse {
    #[schema(example = "2026-04")]
    pub month: String,
    #[schema(example = 50)]
    pub compliance: i64,
}
