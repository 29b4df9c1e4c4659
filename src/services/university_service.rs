// src/services/university_service.rs

use crate::{common::error::AppError, db::UniversityRepository, models::university::University};

// Dados de referência do formulário de relatório e do mapa público.
#[derive(Clone)]
pub struct UniversityService {
    university_repo: UniversityRepository,
}

impl UniversityService {
    pub fn new(university_repo: UniversityRepository) -> Self {
        Self { university_repo }
    }

    pub async fn list(&self) -> Result<Vec<University>, AppError> {
        self.university_repo.list().await
    }
}
