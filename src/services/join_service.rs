// src/services/join_service.rs

use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AuditRepository, JoinRequestRepository},
    models::auth::Profile,
    models::join::{JoinRequest, JoinRequestPayload, JoinReviewPayload, JoinStatus},
    services::rbac,
};

#[derive(Clone)]
pub struct JoinService {
    join_repo: JoinRequestRepository,
    audit_repo: AuditRepository,
}

impl JoinService {
    pub fn new(join_repo: JoinRequestRepository, audit_repo: AuditRepository) -> Self {
        Self {
            join_repo,
            audit_repo,
        }
    }

    // Formulário público de adesão. Visitante anônimo passa None.
    pub async fn create(
        &self,
        user_id: Option<Uuid>,
        payload: &JoinRequestPayload,
    ) -> Result<JoinRequest, AppError> {
        let request = self.join_repo.create(user_id, payload).await?;
        tracing::info!("✅ Pedido de adesão recebido de {}", request.email);
        Ok(request)
    }

    pub async fn list(&self, actor: &Profile) -> Result<Vec<JoinRequest>, AppError> {
        if !rbac::can_administer(actor) {
            return Err(AppError::Forbidden);
        }
        self.join_repo.list().await
    }

    // Aprova ou recusa um pedido pendente. A revisão é terminal e o
    // compare-and-set do repositório decide empates: a segunda
    // revisão concorrente recebe conflito.
    pub async fn review(
        &self,
        actor: &Profile,
        id: Uuid,
        payload: &JoinReviewPayload,
    ) -> Result<JoinRequest, AppError> {
        if !rbac::can_administer(actor) {
            return Err(AppError::Forbidden);
        }

        // "Voltar para pendente" não é uma decisão.
        if payload.status == JoinStatus::Pending {
            return Err(AppError::InvalidStatusTransition);
        }

        let current = self
            .join_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::JoinRequestNotFound)?;

        if current.status != JoinStatus::Pending {
            return Err(AppError::AlreadyReviewed);
        }

        let reviewed = self
            .join_repo
            .review_pending(id, payload.status, actor.id, payload.comment.as_deref())
            .await?
            .ok_or(AppError::AlreadyReviewed)?;

        tracing::info!(
            "✅ Pedido de adesão de {} revisado: {:?}",
            reviewed.email,
            reviewed.status
        );

        // Auditoria é melhor-esforço, como nos relatórios.
        let diff = serde_json::to_value(payload).unwrap_or(Value::Null);
        if let Err(e) = self
            .audit_repo
            .record(actor.id, "review", "join_request", Some(reviewed.id), diff)
            .await
        {
            tracing::warn!("⚠️ Falha ao registrar auditoria (review): {}", e);
        }

        Ok(reviewed)
    }
}
