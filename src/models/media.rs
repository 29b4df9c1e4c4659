// src/models/media.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
    Document,
}

// Item da galeria de mídia. A coluna no banco se chama "type",
// mas isso é palavra reservada em Rust, daí o rename.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Uuid,
    #[schema(example = "Easter Outreach Recap")]
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: MediaType,
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub url: String,
    pub description: Option<String>,
    pub consent_ok: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaPayload {
    #[validate(length(min = 2, message = "The title is too short."))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
    #[validate(length(min = 1, message = "The URL is required."))]
    pub url: String,
    pub description: Option<String>,
    // Sem consentimento confirmado o item não aparece na página pública
    #[serde(default)]
    pub consent_ok: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MediaFilter {
    #[serde(rename = "type")]
    pub kind: Option<MediaType>,
}
