// src/services/auth_service.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ProfileRepository,
    models::auth::{
        Claims, Profile, RegisterPayload, RoleOption, UpdateProfilePayload, UpdateRolePayload,
    },
    services::rbac,
};

#[derive(Clone)]
pub struct AuthService {
    profile_repo: ProfileRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(profile_repo: ProfileRepository, jwt_secret: String) -> Self {
        Self {
            profile_repo,
            jwt_secret,
        }
    }

    // Registro aberto: todo mundo entra como CAMPUS_LEADER. Promoções
    // vêm depois, pela mão de um administrador.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<String, AppError> {
        // Hashing fora do runtime async (bcrypt é caro de propósito)
        let password_clone = payload.password.clone();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let profile = self
            .profile_repo
            .create(
                &payload.email,
                &hashed_password,
                payload.full_name.as_deref(),
                payload.region.as_deref(),
                payload.university_id,
                payload.phone.as_deref(),
            )
            .await?;

        tracing::info!("✅ Novo perfil registrado: {}", profile.email);
        self.create_token(profile.id)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let profile = self
            .profile_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = profile.password_hash.clone();

        // Verificação também em thread separada
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(profile.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<Profile, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.profile_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::ProfileNotFound)
    }

    pub async fn update_own_profile(
        &self,
        profile_id: Uuid,
        payload: &UpdateProfilePayload,
    ) -> Result<Profile, AppError> {
        self.profile_repo
            .update_self(
                profile_id,
                payload.full_name.as_deref(),
                payload.phone.as_deref(),
                payload.region.as_deref(),
            )
            .await?
            .ok_or(AppError::ProfileNotFound)
    }

    // Bootstrap do primeiro administrador. O UPDATE condicional do
    // repositório decide atomicamente; se já havia um ADMIN o papel
    // do chamador fica intacto e devolvemos conflito.
    pub async fn bootstrap_admin(&self, actor: &Profile) -> Result<Profile, AppError> {
        let promoted = self.profile_repo.promote_first_admin(actor.id).await?;
        if !promoted {
            return Err(AppError::AdminAlreadyExists);
        }

        tracing::info!("✅ Primeiro administrador promovido: {}", actor.email);

        self.profile_repo
            .find_by_id(actor.id)
            .await?
            .ok_or(AppError::ProfileNotFound)
    }

    pub async fn list_profiles(&self, actor: &Profile) -> Result<Vec<Profile>, AppError> {
        if !rbac::can_administer(actor) {
            return Err(AppError::Forbidden);
        }
        self.profile_repo.list().await
    }

    // Opções do seletor de papéis da tela de administração
    pub fn role_options(&self, actor: &Profile) -> Result<Vec<RoleOption>, AppError> {
        if !rbac::can_administer(actor) {
            return Err(AppError::Forbidden);
        }

        Ok(rbac::assignable_roles()
            .into_iter()
            .map(|role| RoleOption {
                role,
                label: rbac::role_display_name(role).to_string(),
            })
            .collect())
    }

    pub async fn change_role(
        &self,
        actor: &Profile,
        profile_id: Uuid,
        payload: &UpdateRolePayload,
    ) -> Result<Profile, AppError> {
        if !rbac::can_assign_roles(actor) {
            return Err(AppError::Forbidden);
        }

        let profile = self
            .profile_repo
            .update_role(profile_id, payload.role)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        tracing::info!(
            "✅ Papel de {} alterado para {}",
            profile.email,
            rbac::role_display_name(profile.role)
        );
        Ok(profile)
    }

    fn create_token(&self, profile_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: profile_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
