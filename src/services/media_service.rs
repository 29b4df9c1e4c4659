// src/services/media_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::MediaRepository,
    models::auth::Profile,
    models::media::{CreateMediaPayload, MediaFilter, MediaItem},
    services::rbac,
};

#[derive(Clone)]
pub struct MediaService {
    media_repo: MediaRepository,
}

impl MediaService {
    pub fn new(media_repo: MediaRepository) -> Self {
        Self { media_repo }
    }

    // Galeria pública: só itens com consentimento de imagem.
    pub async fn list_public(&self, filter: &MediaFilter) -> Result<Vec<MediaItem>, AppError> {
        self.media_repo.list(filter.kind, true).await
    }

    // Listagem da equipe de mídia, incluindo itens sem consentimento
    // (aparecem para curadoria, nunca na vitrine).
    pub async fn list_all(
        &self,
        actor: &Profile,
        filter: &MediaFilter,
    ) -> Result<Vec<MediaItem>, AppError> {
        if !rbac::can_manage_media(actor) {
            return Err(AppError::Forbidden);
        }
        self.media_repo.list(filter.kind, false).await
    }

    pub async fn create(
        &self,
        actor: &Profile,
        payload: &CreateMediaPayload,
    ) -> Result<MediaItem, AppError> {
        if !rbac::can_manage_media(actor) {
            return Err(AppError::Forbidden);
        }

        let item = self.media_repo.create(actor.id, payload).await?;
        tracing::info!("✅ Mídia publicada: {}", item.title);
        Ok(item)
    }

    pub async fn delete(&self, actor: &Profile, id: Uuid) -> Result<(), AppError> {
        if !rbac::can_manage_media(actor) {
            return Err(AppError::Forbidden);
        }

        let deleted = self.media_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::MediaNotFound);
        }
        Ok(())
    }
}
