// src/db/join_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::join::{JoinRequest, JoinRequestPayload, JoinStatus};

#[derive(Clone)]
pub struct JoinRequestRepository {
    pool: PgPool,
}

impl JoinRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // O formulário é público; user_id só vem preenchido quando quem
    // pediu estava logado.
    pub async fn create(
        &self,
        user_id: Option<Uuid>,
        payload: &JoinRequestPayload,
    ) -> Result<JoinRequest, AppError> {
        let request = sqlx::query_as::<_, JoinRequest>(
            r#"
            INSERT INTO join_requests (
                user_id, request_type, team_name, program_name,
                full_name, email, phone, university, region,
                motivation, experience, availability
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(payload.request_type)
        .bind(&payload.team_name)
        .bind(&payload.program_name)
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.university)
        .bind(&payload.region)
        .bind(&payload.motivation)
        .bind(&payload.experience)
        .bind(&payload.availability)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<JoinRequest>, AppError> {
        let request =
            sqlx::query_as::<_, JoinRequest>("SELECT * FROM join_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(request)
    }

    pub async fn list(&self) -> Result<Vec<JoinRequest>, AppError> {
        let requests = sqlx::query_as::<_, JoinRequest>(
            "SELECT * FROM join_requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    // Revisão é terminal: só sai de 'pending'. Quem chegar depois
    // de outra revisão recebe None e vira 409.
    pub async fn review_pending(
        &self,
        id: Uuid,
        status: JoinStatus,
        reviewer_id: Uuid,
        comment: Option<&str>,
    ) -> Result<Option<JoinRequest>, AppError> {
        let request = sqlx::query_as::<_, JoinRequest>(
            r#"
            UPDATE join_requests
            SET status = $2, reviewed_by = $3, reviewer_comment = $4, reviewed_at = now()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(reviewer_id)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }
}
