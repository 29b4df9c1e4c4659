// src/services/export_service.rs

// Exportações mensais da secretaria: CSV bruto e PDF nacional, ambos
// somente sobre relatórios aprovados do mês pedido.

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::{
    common::{csv, error::AppError},
    config::Branding,
    db::ReportRepository,
    models::auth::Profile,
    models::kpi::ReportAggregates,
    models::report::MonthlyReport,
    services::{kpi, pdf, rbac},
};

#[derive(Clone)]
pub struct ExportService {
    report_repo: ReportRepository,
    branding: Branding,
}

impl ExportService {
    pub fn new(report_repo: ReportRepository, branding: Branding) -> Self {
        Self {
            report_repo,
            branding,
        }
    }

    // CSV com as linhas completas dos relatórios aprovados. Mês sem
    // aprovados devolve corpo vazio, sem cabeçalho. As exportações
    // cobrem o país inteiro, então ficam com a direção nacional.
    pub async fn monthly_csv(
        &self,
        actor: &Profile,
        month: &str,
    ) -> Result<(String, String), AppError> {
        if !rbac::can_view_all_reports(actor) {
            return Err(AppError::Forbidden);
        }

        let reports = self.report_repo.list_approved_for_month(month).await?;
        let rows: Vec<Map<String, Value>> = reports.iter().map(report_export_row).collect();
        let body = csv::to_csv(&rows)?;

        let filename = format!("{}-reports-{}.csv", self.branding.org_slug(), month);
        tracing::info!("✅ CSV de {} gerado com {} linhas", month, reports.len());
        Ok((filename, body))
    }

    // PDF do relatório nacional: totais, quadro regional e detalhe
    // por campus, tudo a partir do mesmo lote de aprovados.
    pub async fn national_pdf(
        &self,
        actor: &Profile,
        month: &str,
    ) -> Result<(String, Vec<u8>), AppError> {
        if !rbac::can_view_all_reports(actor) {
            return Err(AppError::Forbidden);
        }

        let reports = self.report_repo.list_approved_for_month(month).await?;
        let aggregates = kpi::aggregate_reports(&reports);

        let data = pdf::NationalReportData {
            month_label: pdf::month_label(month),
            generated_at: Utc::now(),
            totals: totals_map(&aggregates),
            by_region: region_maps(&aggregates),
            rows: reports.iter().map(report_pdf_row).collect(),
        };

        let bytes = pdf::build_national_pdf(&data, &self.branding)?;
        let filename = format!(
            "{}-national-report-{}.pdf",
            self.branding.org_slug(),
            month
        );
        tracing::info!("✅ PDF nacional de {} gerado ({} bytes)", month, bytes.len());
        Ok((filename, bytes))
    }
}

// Tabela "National Totals" do PDF. As chaves curtas (integrations,
// meetings, hours) são as que a secretaria usa nos rótulos.
fn totals_map(aggregates: &ReportAggregates) -> Map<String, Value> {
    let totals = &aggregates.totals;
    let mut map = Map::new();
    map.insert("universities_reached".into(), json!(totals.universities_reached));
    map.insert("tracts_given".into(), json!(totals.tracts_given));
    map.insert("souls_saved".into(), json!(totals.souls_saved));
    map.insert("integrations".into(), json!(totals.integrations_count));
    map.insert("meetings".into(), json!(totals.meetings_count));
    map.insert("hours".into(), json!(totals.hours_invested));
    map.insert("literature_count".into(), json!(totals.literature_count));
    map.insert("literature_money".into(), json!(totals.literature_money));
    map
}

fn region_maps(aggregates: &ReportAggregates) -> Vec<Map<String, Value>> {
    aggregates
        .by_region
        .iter()
        .map(|entry| {
            let mut map = Map::new();
            map.insert("region".into(), json!(entry.region));
            map.insert("universities".into(), json!(entry.universities));
            map.insert("souls".into(), json!(entry.souls));
            map.insert("tracts".into(), json!(entry.tracts));
            map
        })
        .collect()
}

fn report_pdf_row(report: &MonthlyReport) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("region".into(), json!(report.region));
    map.insert("universities".into(), json!(report.universities_reached));
    map.insert("souls".into(), json!(report.souls_saved));
    map.insert("tracts".into(), json!(report.tracts_given));
    map
}

// Linha completa de um relatório para o CSV, na ordem das colunas da
// tabela. Estruturas (anexos) saem como JSON compacto.
fn report_export_row(report: &MonthlyReport) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("id".into(), json!(report.id));
    map.insert("month".into(), json!(report.month));
    map.insert("reporter_id".into(), json!(report.reporter_id));
    map.insert("region".into(), json!(report.region));
    map.insert("university_id".into(), json!(report.university_id));

    map.insert("meetings_count".into(), json!(report.meetings_count));
    map.insert("hours_invested".into(), json!(report.hours_invested));
    map.insert("universities_reached".into(), json!(report.universities_reached));
    map.insert("tracts_given".into(), json!(report.tracts_given));
    map.insert("souls_saved".into(), json!(report.souls_saved));
    map.insert("integrations_count".into(), json!(report.integrations_count));
    map.insert("literature_count".into(), json!(report.literature_count));

    map.insert("uploads_youtube".into(), json!(report.uploads_youtube));
    map.insert("uploads_instagram".into(), json!(report.uploads_instagram));
    map.insert("uploads_tiktok".into(), json!(report.uploads_tiktok));
    map.insert("uploads_facebook".into(), json!(report.uploads_facebook));
    map.insert("uploads_other".into(), json!(report.uploads_other));

    map.insert("prayer_hours_friday".into(), json!(report.prayer_hours_friday));
    map.insert("prayer_hours_literature".into(), json!(report.prayer_hours_literature));
    map.insert("prayer_hours_media".into(), json!(report.prayer_hours_media));
    map.insert(
        "prayer_hours_intercession".into(),
        json!(report.prayer_hours_intercession),
    );
    map.insert("prayer_hours_worship".into(), json!(report.prayer_hours_worship));
    map.insert(
        "prayer_hours_evangelism".into(),
        json!(report.prayer_hours_evangelism),
    );

    map.insert("literature_money".into(), json!(report.literature_money));
    map.insert("remarks".into(), json!(report.remarks));
    map.insert("attachments".into(), json!(report.attachments));
    map.insert("status".into(), json!(report.status));
    map.insert("reviewed_by".into(), json!(report.reviewed_by));
    map.insert("reviewer_comment".into(), json!(report.reviewer_comment));
    map.insert("created_at".into(), json!(report.created_at));
    map.insert("updated_at".into(), json!(report.updated_at));
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::ReportStatus;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn approved_report(region: &str, souls: i64) -> MonthlyReport {
        MonthlyReport {
            id: Uuid::new_v4(),
            month: "2026-04".into(),
            reporter_id: Uuid::new_v4(),
            region: region.into(),
            university_id: Uuid::new_v4(),
            meetings_count: 2,
            hours_invested: 10,
            universities_reached: 1,
            tracts_given: 40,
            souls_saved: souls,
            integrations_count: 3,
            literature_count: 5,
            uploads_youtube: 1,
            uploads_instagram: 2,
            uploads_tiktok: 0,
            uploads_facebook: 0,
            uploads_other: 0,
            prayer_hours_friday: 1,
            prayer_hours_literature: 0,
            prayer_hours_media: 0,
            prayer_hours_intercession: 2,
            prayer_hours_worship: 0,
            prayer_hours_evangelism: 0,
            literature_money: Decimal::new(12550, 2),
            remarks: None,
            attachments: sqlx::types::Json(Vec::new()),
            status: ReportStatus::Approved,
            reviewed_by: None,
            reviewer_comment: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn csv_row_keeps_table_column_order() {
        let row = report_export_row(&approved_report("Kigali", 3));
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys.first(), Some(&"id"));
        assert_eq!(keys[1], "month");
        assert_eq!(keys[3], "region");
        assert_eq!(keys.last(), Some(&"updated_at"));
        assert_eq!(keys.len(), 31);
    }

    #[test]
    fn totals_use_the_short_labels() {
        let aggregates = kpi::aggregate_reports(&[approved_report("Kigali", 3)]);
        let totals = totals_map(&aggregates);
        let keys: Vec<&str> = totals.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "universities_reached",
                "tracts_given",
                "souls_saved",
                "integrations",
                "meetings",
                "hours",
                "literature_count",
                "literature_money",
            ]
        );
    }

    #[test]
    fn pdf_rows_carry_the_four_summary_columns() {
        let row = report_pdf_row(&approved_report("Huye", 7));
        assert_eq!(row.get("region"), Some(&json!("Huye")));
        assert_eq!(row.get("souls"), Some(&json!(7)));
        assert_eq!(row.get("universities"), Some(&json!(1)));
        assert_eq!(row.get("tracts"), Some(&json!(40)));
    }

    #[test]
    fn approved_rows_become_csv_lines() {
        let rows: Vec<Map<String, Value>> = [approved_report("Kigali", 3)]
            .iter()
            .map(report_export_row)
            .collect();
        let body = csv::to_csv(&rows).unwrap();
        let mut lines = body.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,month,reporter_id,region"));
        assert_eq!(lines.count(), 1);
    }
}
