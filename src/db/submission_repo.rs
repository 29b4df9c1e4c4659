// src/db/submission_repo.rs

use sqlx::PgPool;

use crate::common::error::AppError;
use crate::models::submission::{Submission, SubmissionPayload};

#[derive(Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &SubmissionPayload) -> Result<Submission, AppError> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.subject)
        .bind(&payload.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    pub async fn list(&self) -> Result<Vec<Submission>, AppError> {
        let submissions = sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(submissions)
    }
}
