// src/db/profile_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::auth::{Profile, UserRole};

// O repositório de perfis, responsável por todas as interações com a
// tabela 'profiles'
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    // Cria um novo perfil, com tratamento específico para e-mail
    // duplicado (vira 409 em vez de 500).
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: Option<&str>,
        region: Option<&str>,
        university_id: Option<Uuid>,
        phone: Option<&str>,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (email, password_hash, full_name, region, university_id, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .bind(region)
        .bind(university_id)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(profile)
    }

    // Autoatualização: nome, telefone e região. Campo ausente no
    // payload fica como está (COALESCE).
    pub async fn update_self(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        phone: Option<&str>,
        region: Option<&str>,
    ) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET full_name = COALESCE($2, full_name),
                phone = COALESCE($3, phone),
                region = COALESCE($4, region),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(phone)
        .bind(region)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn update_role(
        &self,
        id: Uuid,
        role: UserRole,
    ) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET role = $2, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn list(&self) -> Result<Vec<Profile>, AppError> {
        let profiles =
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(profiles)
    }

    // Bootstrap do primeiro administrador num único UPDATE
    // condicional: ou o chamador vira ADMIN, ou já existia um e nada
    // muda. Sem janela entre checar e agir.
    pub async fn promote_first_admin(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET role = 'ADMIN', updated_at = now()
            WHERE id = $1
              AND NOT EXISTS (SELECT 1 FROM profiles WHERE role = 'ADMIN')
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
