// src/services/kpi.rs

// Agregação de relatórios e cálculo de conformidade. Funções puras:
// recebem linhas já buscadas, nunca tocam o banco. Quem faz I/O é o
// KpiService em kpi_service.rs.

use std::collections::BTreeMap;

use crate::models::kpi::{
    NationalTotals, PlatformBreakdownEntry, RegionalBreakdownEntry, ReportAggregates, StatusCounts,
};
use crate::models::report::{MonthlyReport, ReportStatus, SocialPlatform};

// Soma das seis colunas de horas de oração de um relatório
pub fn prayer_hours_total(report: &MonthlyReport) -> i64 {
    report.prayer_hours_friday
        + report.prayer_hours_literature
        + report.prayer_hours_media
        + report.prayer_hours_intercession
        + report.prayer_hours_worship
        + report.prayer_hours_evangelism
}

// Agrega um lote de relatórios de um mês.
//
// As contagens de status cobrem todos os relatórios recebidos; os
// totais nacionais, o quadro regional e o quadro de plataformas
// consideram SOMENTE os aprovados. O resultado não depende da ordem
// de entrada: regiões saem em ordem alfabética e plataformas na
// ordem de declaração do enum (as cinco sempre presentes).
pub fn aggregate_reports(reports: &[MonthlyReport]) -> ReportAggregates {
    let mut counts = StatusCounts::default();
    let mut totals = NationalTotals::default();
    let mut regions: BTreeMap<String, RegionalBreakdownEntry> = BTreeMap::new();
    let mut platform_uploads = [0i64; SocialPlatform::ALL.len()];

    for report in reports {
        counts.total += 1;
        match report.status {
            ReportStatus::Draft => counts.draft += 1,
            ReportStatus::Submitted => counts.submitted += 1,
            ReportStatus::Approved => counts.approved += 1,
            ReportStatus::Rejected => counts.rejected += 1,
        }

        if report.status != ReportStatus::Approved {
            continue;
        }

        totals.universities_reached += report.universities_reached;
        totals.tracts_given += report.tracts_given;
        totals.souls_saved += report.souls_saved;
        totals.integrations_count += report.integrations_count;
        totals.meetings_count += report.meetings_count;
        totals.hours_invested += report.hours_invested;
        totals.literature_count += report.literature_count;
        totals.prayer_hours += prayer_hours_total(report);
        totals.literature_money += report.literature_money;

        let entry = regions
            .entry(report.region.clone())
            .or_insert_with(|| RegionalBreakdownEntry {
                region: report.region.clone(),
                reports: 0,
                universities: 0,
                souls: 0,
                tracts: 0,
            });
        entry.reports += 1;
        entry.universities += report.universities_reached;
        entry.souls += report.souls_saved;
        entry.tracts += report.tracts_given;

        for (slot, platform) in platform_uploads.iter_mut().zip(SocialPlatform::ALL) {
            *slot += platform.upload_count(report);
        }
    }

    // O painel trata "pendente" como sinônimo de "enviado".
    counts.pending = counts.submitted;

    ReportAggregates {
        counts,
        totals,
        by_region: regions.into_values().collect(),
        by_platform: SocialPlatform::ALL
            .iter()
            .zip(platform_uploads)
            .map(|(platform, uploads)| PlatformBreakdownEntry {
                platform: *platform,
                label: platform.label().to_string(),
                uploads,
            })
            .collect(),
    }
}

// Percentual (inteiro, arredondado) de líderes que já enviaram o
// relatório do mês. Denominador zero devolve 0, nunca divide.
//
// O denominador é o número de repórteres distintos de toda a base,
// uma aproximação do total de líderes ativos. Herdada do processo da
// secretaria; trocar por uma contagem de perfis muda o indicador.
pub fn compliance_rate(distinct_reporters: usize, submitted_or_approved: u64) -> i64 {
    if distinct_reporters == 0 {
        return 0;
    }
    ((submitted_or_approved as f64 / distinct_reporters as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn report(region: &str, status: ReportStatus) -> MonthlyReport {
        MonthlyReport {
            id: Uuid::new_v4(),
            month: "2026-04".into(),
            reporter_id: Uuid::new_v4(),
            region: region.into(),
            university_id: Uuid::new_v4(),
            meetings_count: 0,
            hours_invested: 0,
            universities_reached: 0,
            tracts_given: 0,
            souls_saved: 0,
            integrations_count: 0,
            literature_count: 0,
            uploads_youtube: 0,
            uploads_instagram: 0,
            uploads_tiktok: 0,
            uploads_facebook: 0,
            uploads_other: 0,
            prayer_hours_friday: 0,
            prayer_hours_literature: 0,
            prayer_hours_media: 0,
            prayer_hours_intercession: 0,
            prayer_hours_worship: 0,
            prayer_hours_evangelism: 0,
            literature_money: Decimal::ZERO,
            remarks: None,
            attachments: sqlx::types::Json(Vec::new()),
            status,
            reviewed_by: None,
            reviewer_comment: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // Cenário clássico da secretaria: dois campi de Kigali e um de
    // Huye aprovados, mais um envio de Kigali ainda na fila.
    fn mixed_batch() -> Vec<MonthlyReport> {
        let mut a = report("Kigali", ReportStatus::Approved);
        a.souls_saved = 3;
        a.universities_reached = 1;
        a.tracts_given = 40;
        a.uploads_youtube = 2;

        let mut b = report("Kigali", ReportStatus::Approved);
        b.souls_saved = 2;
        b.universities_reached = 1;
        b.tracts_given = 10;
        b.uploads_instagram = 5;

        let mut c = report("Huye", ReportStatus::Approved);
        c.souls_saved = 3;
        c.universities_reached = 2;
        c.tracts_given = 25;
        c.prayer_hours_friday = 4;
        c.prayer_hours_worship = 1;

        let mut d = report("Kigali", ReportStatus::Submitted);
        d.souls_saved = 10;
        d.uploads_youtube = 99;

        vec![a, b, c, d]
    }

    #[test]
    fn totals_ignore_everything_not_approved() {
        let agg = aggregate_reports(&mixed_batch());
        assert_eq!(agg.totals.souls_saved, 8);
        assert_eq!(agg.totals.universities_reached, 4);
        assert_eq!(agg.totals.tracts_given, 75);
        assert_eq!(agg.totals.prayer_hours, 5);
    }

    #[test]
    fn status_counts_cover_the_whole_batch() {
        let agg = aggregate_reports(&mixed_batch());
        assert_eq!(agg.counts.total, 4);
        assert_eq!(agg.counts.approved, 3);
        assert_eq!(agg.counts.submitted, 1);
        assert_eq!(agg.counts.pending, agg.counts.submitted);
        assert_eq!(agg.counts.draft, 0);
        assert_eq!(agg.counts.rejected, 0);
    }

    #[test]
    fn regions_come_out_sorted_with_their_sums() {
        let agg = aggregate_reports(&mixed_batch());
        let regions: Vec<&str> = agg.by_region.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["Huye", "Kigali"]);

        let kigali = &agg.by_region[1];
        assert_eq!(kigali.reports, 2);
        assert_eq!(kigali.souls, 5);
        assert_eq!(kigali.tracts, 50);

        let huye = &agg.by_region[0];
        assert_eq!(huye.reports, 1);
        assert_eq!(huye.souls, 3);
    }

    #[test]
    fn platform_breakdown_keeps_declaration_order() {
        let agg = aggregate_reports(&mixed_batch());
        let platforms: Vec<SocialPlatform> =
            agg.by_platform.iter().map(|p| p.platform).collect();
        assert_eq!(platforms, SocialPlatform::ALL.to_vec());

        // O envio pendente com 99 uploads não conta.
        assert_eq!(agg.by_platform[0].uploads, 2);
        assert_eq!(agg.by_platform[1].uploads, 5);
        assert_eq!(agg.by_platform[2].uploads, 0);
    }

    #[test]
    fn aggregation_is_input_order_independent() {
        let batch = mixed_batch();
        let mut reversed = batch.clone();
        reversed.reverse();
        let mut rotated = batch.clone();
        rotated.rotate_left(2);

        let reference = aggregate_reports(&batch);
        assert_eq!(aggregate_reports(&reversed), reference);
        assert_eq!(aggregate_reports(&rotated), reference);
    }

    #[test]
    fn empty_batch_yields_zeroes_not_errors() {
        let agg = aggregate_reports(&[]);
        assert_eq!(agg.counts, StatusCounts::default());
        assert_eq!(agg.totals, NationalTotals::default());
        assert!(agg.by_region.is_empty());
        assert_eq!(agg.by_platform.len(), 5);
        assert!(agg.by_platform.iter().all(|p| p.uploads == 0));
    }

    #[test]
    fn money_sums_as_decimal() {
        let mut a = report("Kigali", ReportStatus::Approved);
        a.literature_money = Decimal::new(12550, 2); // 125.50
        let mut b = report("Kigali", ReportStatus::Approved);
        b.literature_money = Decimal::new(7450, 2); // 74.50
        let agg = aggregate_reports(&[a, b]);
        assert_eq!(agg.totals.literature_money, Decimal::new(20000, 2));
    }

    #[test]
    fn compliance_is_a_rounded_integer_percent() {
        assert_eq!(compliance_rate(4, 2), 50);
        assert_eq!(compliance_rate(3, 1), 33);
        assert_eq!(compliance_rate(3, 2), 67);
        assert_eq!(compliance_rate(8, 8), 100);
    }

    #[test]
    fn compliance_with_no_reporters_is_zero() {
        assert_eq!(compliance_rate(0, 0), 0);
        assert_eq!(compliance_rate(0, 5), 0);
    }
}
