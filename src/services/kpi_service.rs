// src/services/kpi_service.rs

use crate::{
    common::error::AppError,
    db::{KpiRepository, ReportRepository},
    models::auth::Profile,
    models::kpi::{ComplianceResponse, PublicKpis, ReportAggregates},
    services::{kpi, rbac},
};

#[derive(Clone)]
pub struct KpiService {
    report_repo: ReportRepository,
    kpi_repo: KpiRepository,
}

impl KpiService {
    pub fn new(report_repo: ReportRepository, kpi_repo: KpiRepository) -> Self {
        Self {
            report_repo,
            kpi_repo,
        }
    }

    // Painel interno: agrega as linhas do mês que o papel do chamador
    // enxerga. A matemática em si mora em services::kpi.
    pub async fn dashboard(
        &self,
        actor: &Profile,
        month: &str,
    ) -> Result<ReportAggregates, AppError> {
        let scope = rbac::report_scope(actor);
        let reports = self
            .report_repo
            .list(&scope, Some(month), None, None)
            .await?;
        Ok(kpi::aggregate_reports(&reports))
    }

    // O indicador de conformidade nunca derruba o painel: qualquer
    // falha de consulta degrada para 0 com aviso no log.
    pub async fn compliance(&self, month: &str) -> ComplianceResponse {
        let compliance = match self.compliance_rate(month).await {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!("⚠️ Falha ao calcular conformidade de {}: {}", month, e);
                0
            }
        };

        ComplianceResponse {
            month: month.to_owned(),
            compliance,
        }
    }

    async fn compliance_rate(&self, month: &str) -> Result<i64, AppError> {
        let reporters = self.kpi_repo.distinct_reporter_count().await?;
        let sent = self.kpi_repo.count_submitted_or_approved(month).await?;
        Ok(kpi::compliance_rate(reporters as usize, sent as u64))
    }

    // Números públicos da página inicial: o mês pedido, ou o mais
    // recente com dados.
    pub async fn public_kpis(&self, month: Option<&str>) -> Result<Option<PublicKpis>, AppError> {
        match month {
            Some(m) => self.kpi_repo.public_kpis_for_month(m).await,
            None => self.kpi_repo.latest_public_kpis().await,
        }
    }

    pub async fn history(&self, months: i64) -> Result<Vec<PublicKpis>, AppError> {
        // Entre 1 e 24 meses; os gráficos pedem 6 por padrão.
        self.kpi_repo.public_kpi_history(months.clamp(1, 24)).await
    }
}
