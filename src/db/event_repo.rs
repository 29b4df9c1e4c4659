// src/db/event_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::event::{CreateEventPayload, Event, EventFilter, EventTimeFilter, UpdateEventPayload};

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        created_by: Uuid,
        payload: &CreateEventPayload,
    ) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, start_at, end_at, location, category, capacity, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.start_at)
        .bind(payload.end_at)
        .bind(&payload.location)
        .bind(&payload.category)
        .bind(payload.capacity)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    // "upcoming"/"past" viram um par de bounds opcionais sobre start_at,
    // relativo ao instante que o serviço passou.
    pub async fn list(
        &self,
        filter: &EventFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, AppError> {
        let (after, before) = match filter.time {
            Some(EventTimeFilter::Upcoming) => (Some(now), None),
            Some(EventTimeFilter::Past) => (None, Some(now)),
            None => (None, None),
        };

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::timestamptz IS NULL OR start_at >= $2)
              AND ($3::timestamptz IS NULL OR start_at < $3)
            ORDER BY start_at ASC
            "#,
        )
        .bind(&filter.category)
        .bind(after)
        .bind(before)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    // Atualização parcial: campo ausente mantém o valor atual.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateEventPayload,
    ) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                start_at = COALESCE($4, start_at),
                end_at = COALESCE($5, end_at),
                location = COALESCE($6, location),
                category = COALESCE($7, category),
                capacity = COALESCE($8, capacity),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.start_at)
        .bind(payload.end_at)
        .bind(&payload.location)
        .bind(&payload.category)
        .bind(payload.capacity)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
