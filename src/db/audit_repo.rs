// src/db/audit_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;

#[derive(Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Trilha append-only. O diff guarda o payload que motivou a ação,
    // não o estado resultante.
    pub async fn record(
        &self,
        user_id: Uuid,
        action: &str,
        entity: &str,
        entity_id: Option<Uuid>,
        diff: serde_json::Value,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (user_id, action, entity, entity_id, diff)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(action)
        .bind(entity)
        .bind(entity_id)
        .bind(diff)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
