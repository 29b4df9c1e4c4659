// src/services/report_service.rs

use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AuditRepository, ReportRepository},
    models::auth::Profile,
    models::report::{MonthlyReport, ReportPayload, ReportStatus, ReviewPayload},
    services::rbac,
};

#[derive(Clone)]
pub struct ReportService {
    report_repo: ReportRepository,
    audit_repo: AuditRepository,
}

impl ReportService {
    pub fn new(report_repo: ReportRepository, audit_repo: AuditRepository) -> Self {
        Self {
            report_repo,
            audit_repo,
        }
    }

    // Um relatório nasce como rascunho ou já enviado, nunca em outro
    // status. O repórter é sempre quem chamou, não vem do payload.
    pub async fn create(
        &self,
        actor: &Profile,
        payload: &ReportPayload,
    ) -> Result<MonthlyReport, AppError> {
        if !matches!(
            payload.status,
            ReportStatus::Draft | ReportStatus::Submitted
        ) {
            return Err(AppError::InvalidStatusTransition);
        }

        let report = self.report_repo.create(actor.id, payload).await?;

        self.audit(actor.id, "create", report.id, payload_diff(payload))
            .await;
        Ok(report)
    }

    // Visibilidade segue o escopo do papel. Relatório fora do escopo
    // devolve 404, como se não existisse.
    pub async fn get(&self, actor: &Profile, id: Uuid) -> Result<MonthlyReport, AppError> {
        let report = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ReportNotFound)?;

        let visible = report.reporter_id == actor.id
            || rbac::can_view_regional_reports(actor, &report.region);
        if !visible {
            return Err(AppError::ReportNotFound);
        }

        Ok(report)
    }

    pub async fn list(
        &self,
        actor: &Profile,
        month: Option<&str>,
        status: Option<ReportStatus>,
        region: Option<&str>,
    ) -> Result<Vec<MonthlyReport>, AppError> {
        let scope = rbac::report_scope(actor);
        self.report_repo.list(&scope, month, status, region).await
    }

    // Edição e envio passam pelo mesmo caminho: o payload carrega o
    // status desejado. Status igual ao atual é edição de conteúdo;
    // diferente, tem que ser uma transição válida da máquina de
    // estados. O UPDATE é condicionado ao status que lemos, então uma
    // revisão concorrente faz a edição perder limpo com 409.
    pub async fn update(
        &self,
        actor: &Profile,
        id: Uuid,
        payload: &ReportPayload,
    ) -> Result<MonthlyReport, AppError> {
        if !matches!(
            payload.status,
            ReportStatus::Draft | ReportStatus::Submitted
        ) {
            return Err(AppError::InvalidStatusTransition);
        }

        let current = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ReportNotFound)?;

        if !rbac::can_edit_report(actor, current.reporter_id, current.status) {
            return Err(AppError::Forbidden);
        }

        if payload.status != current.status && !current.status.can_transition_to(payload.status) {
            return Err(AppError::InvalidStatusTransition);
        }

        let updated = self
            .report_repo
            .update_guarded(id, current.status, payload)
            .await?
            .ok_or(AppError::InvalidStatusTransition)?;

        self.audit(actor.id, "update", updated.id, payload_diff(payload))
            .await;
        Ok(updated)
    }

    // Aprova ou devolve um relatório enviado. O compare-and-set do
    // repositório garante que só uma revisão vence; a perdedora
    // recebe conflito.
    pub async fn review(
        &self,
        actor: &Profile,
        id: Uuid,
        payload: &ReviewPayload,
    ) -> Result<MonthlyReport, AppError> {
        let current = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ReportNotFound)?;

        if !rbac::can_approve_reports(actor, Some(&current.region)) {
            return Err(AppError::Forbidden);
        }

        if current.status != ReportStatus::Submitted {
            return Err(AppError::InvalidStatusTransition);
        }

        let reviewed = self
            .report_repo
            .review_submitted(
                id,
                payload.decision.target_status(),
                actor.id,
                payload.comment.as_deref(),
            )
            .await?
            .ok_or(AppError::AlreadyReviewed)?;

        tracing::info!(
            "✅ Relatório {} de {} revisado: {:?}",
            reviewed.month,
            reviewed.region,
            payload.decision
        );

        self.audit(
            actor.id,
            "review",
            reviewed.id,
            serde_json::to_value(payload).unwrap_or(Value::Null),
        )
        .await;
        Ok(reviewed)
    }

    // Auditoria é melhor-esforço: falha vira warning, nunca desfaz a
    // operação que já aconteceu.
    async fn audit(&self, actor_id: Uuid, action: &str, report_id: Uuid, diff: Value) {
        if let Err(e) = self
            .audit_repo
            .record(actor_id, action, "monthly_report", Some(report_id), diff)
            .await
        {
            tracing::warn!("⚠️ Falha ao registrar auditoria ({}): {}", action, e);
        }
    }
}

fn payload_diff(payload: &ReportPayload) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}
