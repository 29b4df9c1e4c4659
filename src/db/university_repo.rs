// src/db/university_repo.rs

use sqlx::PgPool;

use crate::common::error::AppError;
use crate::models::university::University;

#[derive(Clone)]
pub struct UniversityRepository {
    pool: PgPool,
}

impl UniversityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // O mapa e os selects do formulário agrupam por região, então já
    // devolvemos na ordem que a tela consome.
    pub async fn list(&self) -> Result<Vec<University>, AppError> {
        let universities = sqlx::query_as::<_, University>(
            "SELECT * FROM universities ORDER BY region ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(universities)
    }
}
