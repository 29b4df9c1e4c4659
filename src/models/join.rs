// src/models/join.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "join_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JoinStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "join_request_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestType {
    Team,
    Program,
}

// Pedido de adesão vindo do formulário público. Quem pede escolhe
// uma equipe OU um programa, nunca os dois ao mesmo tempo.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub request_type: JoinRequestType,
    #[schema(example = "Media Team")]
    pub team_name: Option<String>,
    pub program_name: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub region: Option<String>,
    pub motivation: String,
    pub experience: Option<String>,
    pub availability: Option<String>,
    pub status: JoinStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewer_comment: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestPayload {
    pub request_type: JoinRequestType,
    pub team_name: Option<String>,
    pub program_name: Option<String>,
    #[validate(length(min = 2, message = "The full name is too short."))]
    pub full_name: String,
    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub region: Option<String>,
    #[validate(length(min = 10, message = "Please tell us a bit more about your motivation."))]
    pub motivation: String,
    pub experience: Option<String>,
    pub availability: Option<String>,
}

impl JoinRequestPayload {
    // O tipo do pedido tem que bater com o campo preenchido.
    pub fn validate_consistency(&self) -> Result<(), ValidationError> {
        let ok = match self.request_type {
            JoinRequestType::Team => {
                self.team_name.as_deref().is_some_and(|t| !t.trim().is_empty())
                    && self.program_name.is_none()
            }
            JoinRequestType::Program => {
                self.program_name.as_deref().is_some_and(|p| !p.trim().is_empty())
                    && self.team_name.is_none()
            }
        };
        if !ok {
            let mut err = ValidationError::new("TeamXorProgram");
            err.message =
                Some("Choose exactly one team or one program, matching the request type.".into());
            return Err(err);
        }
        Ok(())
    }
}

// Revisão de um pedido pendente: vira approved ou rejected, nunca
// volta para pending. Serialize para a trilha de auditoria.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JoinReviewPayload {
    pub status: JoinStatus,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_payload() -> JoinRequestPayload {
        JoinRequestPayload {
            request_type: JoinRequestType::Team,
            team_name: Some("Media Team".into()),
            program_name: None,
            full_name: "Alice Uwase".into(),
            email: "alice@example.org".into(),
            phone: None,
            university: None,
            region: Some("Kigali".into()),
            motivation: "I want to serve with the media team.".into(),
            experience: None,
            availability: None,
        }
    }

    #[test]
    fn team_request_needs_team_name_only() {
        assert!(base_payload().validate_consistency().is_ok());

        let mut both = base_payload();
        both.program_name = Some("Campus Ministry".into());
        assert!(both.validate_consistency().is_err());

        let mut neither = base_payload();
        neither.team_name = None;
        assert!(neither.validate_consistency().is_err());

        let mut blank = base_payload();
        blank.team_name = Some("  ".into());
        assert!(blank.validate_consistency().is_err());
    }

    #[test]
    fn program_request_mirrors_the_rule() {
        let mut p = base_payload();
        p.request_type = JoinRequestType::Program;
        p.team_name = None;
        p.program_name = Some("Discipleship Program".into());
        assert!(p.validate_consistency().is_ok());

        p.team_name = Some("Media Team".into());
        assert!(p.validate_consistency().is_err());
    }
}
