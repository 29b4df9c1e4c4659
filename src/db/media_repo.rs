// src/db/media_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::media::{CreateMediaPayload, MediaItem, MediaType};

#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        created_by: Uuid,
        payload: &CreateMediaPayload,
    ) -> Result<MediaItem, AppError> {
        let item = sqlx::query_as::<_, MediaItem>(
            r#"
            INSERT INTO media (title, type, url, description, consent_ok, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(payload.kind)
        .bind(&payload.url)
        .bind(&payload.description)
        .bind(payload.consent_ok)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    // A vitrine pública só mostra itens com consentimento registrado;
    // a listagem interna passa only_consented = false e vê tudo.
    pub async fn list(
        &self,
        kind: Option<MediaType>,
        only_consented: bool,
    ) -> Result<Vec<MediaItem>, AppError> {
        let items = sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT * FROM media
            WHERE ($1::media_type IS NULL OR type = $1)
              AND (NOT $2 OR consent_ok)
            ORDER BY created_at DESC
            "#,
        )
        .bind(kind)
        .bind(only_consented)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
