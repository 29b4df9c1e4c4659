// src/db/report_repo.rs

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::report::{MonthlyReport, ReportPayload, ReportStatus};
use crate::services::rbac::ReportScope;

// O repositório de relatórios mensais. Todas as queries são checadas
// em tempo de execução; o FromRow mapeia as colunas pelo nome.
#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Insere um relatório novo. A unicidade (repórter, mês, campus)
    // é garantida pelo banco; violação vira erro 409 lá em cima.
    pub async fn create(
        &self,
        reporter_id: Uuid,
        payload: &ReportPayload,
    ) -> Result<MonthlyReport, AppError> {
        let report = sqlx::query_as::<_, MonthlyReport>(
            r#"
            INSERT INTO monthly_reports (
                month, reporter_id, region, university_id,
                meetings_count, hours_invested, universities_reached,
                tracts_given, souls_saved, integrations_count, literature_count,
                uploads_youtube, uploads_instagram, uploads_tiktok,
                uploads_facebook, uploads_other,
                prayer_hours_friday, prayer_hours_literature, prayer_hours_media,
                prayer_hours_intercession, prayer_hours_worship, prayer_hours_evangelism,
                literature_money, remarks, attachments, status
            )
            VALUES (
                $1, $2, $3, $4,
                $5, $6, $7,
                $8, $9, $10, $11,
                $12, $13, $14,
                $15, $16,
                $17, $18, $19,
                $20, $21, $22,
                $23, $24, $25, $26
            )
            RETURNING *
            "#,
        )
        .bind(&payload.month)
        .bind(reporter_id)
        .bind(&payload.region)
        .bind(payload.university_id)
        .bind(payload.meetings_count)
        .bind(payload.hours_invested)
        .bind(payload.universities_reached)
        .bind(payload.tracts_given)
        .bind(payload.souls_saved)
        .bind(payload.integrations_count)
        .bind(payload.literature_count)
        .bind(payload.uploads_youtube)
        .bind(payload.uploads_instagram)
        .bind(payload.uploads_tiktok)
        .bind(payload.uploads_facebook)
        .bind(payload.uploads_other)
        .bind(payload.prayer_hours_friday)
        .bind(payload.prayer_hours_literature)
        .bind(payload.prayer_hours_media)
        .bind(payload.prayer_hours_intercession)
        .bind(payload.prayer_hours_worship)
        .bind(payload.prayer_hours_evangelism)
        .bind(payload.literature_money)
        .bind(&payload.remarks)
        .bind(sqlx::types::Json(&payload.attachments))
        .bind(payload.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::ReportAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MonthlyReport>, AppError> {
        let report =
            sqlx::query_as::<_, MonthlyReport>("SELECT * FROM monthly_reports WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(report)
    }

    // Listagem com escopo do papel + filtros opcionais. O padrão
    // "($n IS NULL OR coluna = $n)" deixa a query única e estável.
    pub async fn list(
        &self,
        scope: &ReportScope,
        month: Option<&str>,
        status: Option<ReportStatus>,
        region: Option<&str>,
    ) -> Result<Vec<MonthlyReport>, AppError> {
        let (scope_region, scope_reporter) = match scope {
            ReportScope::All => (None, None),
            ReportScope::Region(r) => (Some(r.as_str()), None),
            ReportScope::Reporter(id) => (None, Some(*id)),
        };

        let reports = sqlx::query_as::<_, MonthlyReport>(
            r#"
            SELECT * FROM monthly_reports
            WHERE ($1::text IS NULL OR region = $1)
              AND ($2::uuid IS NULL OR reporter_id = $2)
              AND ($3::text IS NULL OR month = $3)
              AND ($4::report_status IS NULL OR status = $4)
              AND ($5::text IS NULL OR region = $5)
            ORDER BY month DESC, created_at DESC
            "#,
        )
        .bind(scope_region)
        .bind(scope_reporter)
        .bind(month)
        .bind(status)
        .bind(region)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    // Atualiza um relatório SE ele ainda estiver no status esperado.
    // Zero linhas afetadas significa que alguém mexeu antes: o
    // chamador transforma o None em conflito 409.
    pub async fn update_guarded(
        &self,
        id: Uuid,
        expected_status: ReportStatus,
        payload: &ReportPayload,
    ) -> Result<Option<MonthlyReport>, AppError> {
        let report = sqlx::query_as::<_, MonthlyReport>(
            r#"
            UPDATE monthly_reports SET
                month = $3,
                region = $4,
                university_id = $5,
                meetings_count = $6,
                hours_invested = $7,
                universities_reached = $8,
                tracts_given = $9,
                souls_saved = $10,
                integrations_count = $11,
                literature_count = $12,
                uploads_youtube = $13,
                uploads_instagram = $14,
                uploads_tiktok = $15,
                uploads_facebook = $16,
                uploads_other = $17,
                prayer_hours_friday = $18,
                prayer_hours_literature = $19,
                prayer_hours_media = $20,
                prayer_hours_intercession = $21,
                prayer_hours_worship = $22,
                prayer_hours_evangelism = $23,
                literature_money = $24,
                remarks = $25,
                attachments = $26,
                status = $27,
                updated_at = now()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected_status)
        .bind(&payload.month)
        .bind(&payload.region)
        .bind(payload.university_id)
        .bind(payload.meetings_count)
        .bind(payload.hours_invested)
        .bind(payload.universities_reached)
        .bind(payload.tracts_given)
        .bind(payload.souls_saved)
        .bind(payload.integrations_count)
        .bind(payload.literature_count)
        .bind(payload.uploads_youtube)
        .bind(payload.uploads_instagram)
        .bind(payload.uploads_tiktok)
        .bind(payload.uploads_facebook)
        .bind(payload.uploads_other)
        .bind(payload.prayer_hours_friday)
        .bind(payload.prayer_hours_literature)
        .bind(payload.prayer_hours_media)
        .bind(payload.prayer_hours_intercession)
        .bind(payload.prayer_hours_worship)
        .bind(payload.prayer_hours_evangelism)
        .bind(payload.literature_money)
        .bind(&payload.remarks)
        .bind(sqlx::types::Json(&payload.attachments))
        .bind(payload.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::ReportAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(report)
    }

    // Decide um relatório enviado: compare-and-set no status. Duas
    // revisões concorrentes não se sobrescrevem; a segunda recebe
    // None e vira 409.
    pub async fn review_submitted(
        &self,
        id: Uuid,
        next_status: ReportStatus,
        reviewer_id: Uuid,
        comment: Option<&str>,
    ) -> Result<Option<MonthlyReport>, AppError> {
        let report = sqlx::query_as::<_, MonthlyReport>(
            r#"
            UPDATE monthly_reports
            SET status = $2, reviewed_by = $3, reviewer_comment = $4, updated_at = now()
            WHERE id = $1 AND status = 'submitted'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(next_status)
        .bind(reviewer_id)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn list_approved_for_month(
        &self,
        month: &str,
    ) -> Result<Vec<MonthlyReport>, AppError> {
        let reports = sqlx::query_as::<_, MonthlyReport>(
            r#"
            SELECT * FROM monthly_reports
            WHERE month = $1 AND status = 'approved'
            ORDER BY region ASC, created_at ASC
            "#,
        )
        .bind(month)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }
}

// As consultas agregadas do painel e da página pública moram num
// repositório próprio, espelhando a divisão dos serviços.
#[derive(Clone)]
pub struct KpiRepository {
    pool: PgPool,
}

impl KpiRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Denominador da conformidade: repórteres distintos de toda a
    // base, uma aproximação do número de líderes ativos.
    pub async fn distinct_reporter_count(&self) -> Result<i64, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(DISTINCT reporter_id) AS reporters FROM monthly_reports",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("reporters"))
    }

    // Numerador: quantos relatórios do mês já foram enviados ou
    // aprovados.
    pub async fn count_submitted_or_approved(&self, month: &str) -> Result<i64, AppError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS sent FROM monthly_reports
            WHERE month = $1 AND status IN ('submitted', 'approved')
            "#,
        )
        .bind(month)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("sent"))
    }

    pub async fn public_kpis_for_month(
        &self,
        month: &str,
    ) -> Result<Option<crate::models::kpi::PublicKpis>, AppError> {
        let kpis = sqlx::query_as::<_, crate::models::kpi::PublicKpis>(
            "SELECT * FROM public_kpis WHERE month = $1",
        )
        .bind(month)
        .fetch_optional(&self.pool)
        .await?;
        Ok(kpis)
    }

    pub async fn latest_public_kpis(
        &self,
    ) -> Result<Option<crate::models::kpi::PublicKpis>, AppError> {
        let kpis = sqlx::query_as::<_, crate::models::kpi::PublicKpis>(
            "SELECT * FROM public_kpis ORDER BY month DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(kpis)
    }

    // Últimos N meses com dados, devolvidos em ordem cronológica
    // para os gráficos.
    pub async fn public_kpi_history(
        &self,
        months: i64,
    ) -> Result<Vec<crate::models::kpi::PublicKpis>, AppError> {
        let mut history = sqlx::query_as::<_, crate::models::kpi::PublicKpis>(
            "SELECT * FROM public_kpis ORDER BY month DESC LIMIT $1",
        )
        .bind(months)
        .fetch_all(&self.pool)
        .await?;
        history.reverse();
        Ok(history)
    }
}
