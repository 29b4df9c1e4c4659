// src/models/report.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Enums ---

// Ciclo de vida de um relatório mensal. As transições válidas estão
// em can_transition_to; qualquer outra combinação é rejeitada com 409.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ReportStatus {
    // Máquina de estados: rascunho -> enviado -> aprovado/rejeitado,
    // e rejeitado pode ser reenviado depois de corrigido.
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        matches!(
            (self, next),
            (ReportStatus::Draft, ReportStatus::Submitted)
                | (ReportStatus::Submitted, ReportStatus::Approved)
                | (ReportStatus::Submitted, ReportStatus::Rejected)
                | (ReportStatus::Rejected, ReportStatus::Submitted)
        )
    }
}

// Plataformas de mídia social rastreadas nos relatórios. A lista é
// fechada de propósito: cada plataforma tem a sua coluna no banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Youtube,
    Instagram,
    Tiktok,
    Facebook,
    Other,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Youtube,
        SocialPlatform::Instagram,
        SocialPlatform::Tiktok,
        SocialPlatform::Facebook,
        SocialPlatform::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Tiktok => "TikTok",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Other => "Other",
        }
    }

    // Seleciona o contador de uploads correspondente no relatório.
    pub fn upload_count(&self, report: &MonthlyReport) -> i64 {
        match self {
            SocialPlatform::Youtube => report.uploads_youtube,
            SocialPlatform::Instagram => report.uploads_instagram,
            SocialPlatform::Tiktok => report.uploads_tiktok,
            SocialPlatform::Facebook => report.uploads_facebook,
            SocialPlatform::Other => report.uploads_other,
        }
    }
}

// --- Structs de Domínio ---

// Metadados de um anexo já enviado ao storage (o upload em si não passa por aqui)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentMeta {
    #[schema(example = "fotos-evangelismo.zip")]
    pub name: String,
    pub path: String,
    #[schema(example = 153_600)]
    pub size: i64,
    #[schema(example = "application/zip")]
    pub content_type: Option<String>,
}

// Relatório mensal como vem do banco. A ordem dos campos aqui define
// a ordem das colunas na exportação CSV, então cuidado ao reordenar.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub id: Uuid,
    #[schema(example = "2026-04")]
    pub month: String,
    pub reporter_id: Uuid,
    #[schema(example = "Kigali")]
    pub region: String,
    pub university_id: Uuid,

    pub meetings_count: i64,
    pub hours_invested: i64,
    pub universities_reached: i64,
    pub tracts_given: i64,
    pub souls_saved: i64,
    pub integrations_count: i64,
    pub literature_count: i64,

    pub uploads_youtube: i64,
    pub uploads_instagram: i64,
    pub uploads_tiktok: i64,
    pub uploads_facebook: i64,
    pub uploads_other: i64,

    pub prayer_hours_friday: i64,
    pub prayer_hours_literature: i64,
    pub prayer_hours_media: i64,
    pub prayer_hours_intercession: i64,
    pub prayer_hours_worship: i64,
    pub prayer_hours_evangelism: i64,

    #[schema(example = "125.50")]
    pub literature_money: Decimal,

    pub remarks: Option<String>,
    #[schema(value_type = Vec<AttachmentMeta>)]
    pub attachments: sqlx::types::Json<Vec<AttachmentMeta>>,

    pub status: ReportStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewer_comment: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Payloads ---

fn validate_month(month: &str) -> Result<(), ValidationError> {
    // Exige exatamente "YYYY-MM" com zero à esquerda (ex.: 2026-04).
    let well_formed =
        month.len() == 7 && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok();
    if !well_formed {
        let mut err = ValidationError::new("month");
        err.message = Some("The month must be in YYYY-MM format.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("The value cannot be negative.".into());
        return Err(err);
    }
    Ok(())
}

// Criação/edição de relatório. Campos numéricos ausentes viram zero.
// Serialize existe para a trilha de auditoria guardar o payload.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    #[validate(custom(function = "validate_month"))]
    #[schema(example = "2026-04")]
    pub month: String,
    #[validate(length(min = 2, message = "Region is required."))]
    #[schema(example = "Kigali")]
    pub region: String,
    pub university_id: Uuid,

    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)] // Se o JSON não tiver esse campo, assume 0
    pub meetings_count: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub hours_invested: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub universities_reached: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub tracts_given: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub souls_saved: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub integrations_count: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub literature_count: i64,

    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub uploads_youtube: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub uploads_instagram: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub uploads_tiktok: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub uploads_facebook: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub uploads_other: i64,

    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub prayer_hours_friday: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub prayer_hours_literature: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub prayer_hours_media: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub prayer_hours_intercession: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub prayer_hours_worship: i64,
    #[validate(range(min = 0, message = "The value cannot be negative."))]
    #[serde(default)]
    pub prayer_hours_evangelism: i64,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub literature_money: Decimal,

    pub remarks: Option<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentMeta>,

    // "Salvar rascunho" ou "enviar": os únicos status que um
    // relatório pode ter ao sair do formulário.
    #[serde(default = "default_report_status")]
    pub status: ReportStatus,
}

fn default_report_status() -> ReportStatus {
    ReportStatus::Draft
}

// Decisão sobre um relatório enviado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl ReviewDecision {
    pub fn target_status(self) -> ReportStatus {
        match self {
            ReviewDecision::Approved => ReportStatus::Approved,
            ReviewDecision::Rejected => ReportStatus::Rejected,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub decision: ReviewDecision,
    pub comment: Option<String>,
}

impl ReviewPayload {
    // Regra: rejeição sempre explica o motivo para quem reporta.
    pub fn validate_consistency(&self) -> Result<(), ValidationError> {
        if self.decision == ReviewDecision::Rejected
            && self.comment.as_deref().map_or(true, |c| c.trim().is_empty())
        {
            let mut err = ValidationError::new("CommentRequiredForRejection");
            err.message = Some("A comment is required when rejecting a report.".into());
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_can_only_be_submitted() {
        assert!(ReportStatus::Draft.can_transition_to(ReportStatus::Submitted));
        assert!(!ReportStatus::Draft.can_transition_to(ReportStatus::Approved));
        assert!(!ReportStatus::Draft.can_transition_to(ReportStatus::Rejected));
        assert!(!ReportStatus::Draft.can_transition_to(ReportStatus::Draft));
    }

    #[test]
    fn submitted_can_be_reviewed_either_way() {
        assert!(ReportStatus::Submitted.can_transition_to(ReportStatus::Approved));
        assert!(ReportStatus::Submitted.can_transition_to(ReportStatus::Rejected));
        assert!(!ReportStatus::Submitted.can_transition_to(ReportStatus::Draft));
        assert!(!ReportStatus::Submitted.can_transition_to(ReportStatus::Submitted));
    }

    #[test]
    fn rejected_can_be_resubmitted() {
        assert!(ReportStatus::Rejected.can_transition_to(ReportStatus::Submitted));
        assert!(!ReportStatus::Rejected.can_transition_to(ReportStatus::Approved));
    }

    #[test]
    fn approved_is_terminal() {
        for next in [
            ReportStatus::Draft,
            ReportStatus::Submitted,
            ReportStatus::Approved,
            ReportStatus::Rejected,
        ] {
            assert!(!ReportStatus::Approved.can_transition_to(next));
        }
    }

    #[test]
    fn month_validator_accepts_padded_months_only() {
        assert!(validate_month("2026-04").is_ok());
        assert!(validate_month("2026-12").is_ok());
        assert!(validate_month("2026-13").is_err());
        assert!(validate_month("2026-4").is_err());
        assert!(validate_month("abril").is_err());
        assert!(validate_month("2026-04-01").is_err());
    }

    #[test]
    fn rejection_requires_comment() {
        let without = ReviewPayload {
            decision: ReviewDecision::Rejected,
            comment: None,
        };
        assert!(without.validate_consistency().is_err());

        let blank = ReviewPayload {
            decision: ReviewDecision::Rejected,
            comment: Some("   ".into()),
        };
        assert!(blank.validate_consistency().is_err());

        let with = ReviewPayload {
            decision: ReviewDecision::Rejected,
            comment: Some("Numbers do not match the attachments.".into()),
        };
        assert!(with.validate_consistency().is_ok());

        let approve = ReviewPayload {
            decision: ReviewDecision::Approved,
            comment: None,
        };
        assert!(approve.validate_consistency().is_ok());
    }
}
