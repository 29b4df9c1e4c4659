// src/models/university.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Universidade onde a missão atua. Dados de referência carregados
// por migração; o formulário de relatório escolhe a partir daqui.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: Uuid,
    #[schema(example = "University of Rwanda - Remera Campus")]
    pub name: String,
    #[schema(example = "Kigali")]
    pub city: String,
    #[schema(example = "Kigali")]
    pub region: String,
    pub lat: f64,
    pub lng: f64,
}
