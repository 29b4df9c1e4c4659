// src/models/submission.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mensagem do formulário público de contato
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Partnership inquiry")]
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[validate(length(min = 2, message = "The name is too short."))]
    pub name: String,
    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 2, message = "The subject is too short."))]
    pub subject: String,
    #[validate(length(min = 5, message = "The message is too short."))]
    pub message: String,
}
