// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda a aplicação devolve Result<_, AppError>; a conversão para
// resposta HTTP acontece uma única vez, aqui embaixo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Perfil não encontrado")]
    ProfileNotFound,

    #[error("Relatório não encontrado")]
    ReportNotFound,

    #[error("Evento não encontrado")]
    EventNotFound,

    #[error("Pedido de adesão não encontrado")]
    JoinRequestNotFound,

    #[error("Item de mídia não encontrado")]
    MediaNotFound,

    // Negação de autorização: o chamador existe, mas não pode.
    #[error("Acesso negado")]
    Forbidden,

    // Transição de status fora da máquina de estados (ou revisão
    // que perdeu a corrida para outra revisão concorrente).
    #[error("Transição de status inválida")]
    InvalidStatusTransition,

    #[error("Pedido de adesão já revisado")]
    AlreadyReviewed,

    #[error("Relatório duplicado para o mês")]
    ReportAlreadyExists,

    #[error("Já existe um administrador")]
    AdminAlreadyExists,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Erro ao escrever CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Erro ao gerar PDF: {0}")]
    PdfError(#[from] genpdf::error::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "This e-mail address is already in use.")
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid e-mail or password.")
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid authentication token.",
            ),
            AppError::ProfileNotFound => (StatusCode::NOT_FOUND, "Profile not found."),
            AppError::ReportNotFound => (StatusCode::NOT_FOUND, "Report not found."),
            AppError::EventNotFound => (StatusCode::NOT_FOUND, "Event not found."),
            AppError::JoinRequestNotFound => (StatusCode::NOT_FOUND, "Join request not found."),
            AppError::MediaNotFound => (StatusCode::NOT_FOUND, "Media item not found."),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
            AppError::InvalidStatusTransition => (
                StatusCode::CONFLICT,
                "The report status does not allow this change.",
            ),
            AppError::AlreadyReviewed => (
                StatusCode::CONFLICT,
                "This join request has already been reviewed.",
            ),
            AppError::ReportAlreadyExists => (
                StatusCode::CONFLICT,
                "A report for this month and campus already exists.",
            ),
            AppError::AdminAlreadyExists => {
                (StatusCode::CONFLICT, "An administrator already exists.")
            }

            // Todos os outros erros (DatabaseError, InternalServerError...)
            // viram 500 opaco. O `tracing` guarda a mensagem detalhada.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
