// src/services/event_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::{error::AppError, ics},
    config::Branding,
    db::EventRepository,
    models::auth::Profile,
    models::event::{CreateEventPayload, Event, EventFilter, UpdateEventPayload},
    services::rbac,
};

#[derive(Clone)]
pub struct EventService {
    event_repo: EventRepository,
    branding: Branding,
}

impl EventService {
    pub fn new(event_repo: EventRepository, branding: Branding) -> Self {
        Self {
            event_repo,
            branding,
        }
    }

    // Agenda pública: qualquer visitante lista e abre eventos.
    pub async fn list_public(&self, filter: &EventFilter) -> Result<Vec<Event>, AppError> {
        self.event_repo.list(filter, Utc::now()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Event, AppError> {
        self.event_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::EventNotFound)
    }

    // Arquivo .ics do evento, para o botão "adicionar ao calendário".
    pub async fn ics_download(&self, id: Uuid) -> Result<(String, String), AppError> {
        let event = self.get(id).await?;
        let body = ics::event_to_ics(
            &event,
            &self.branding.org_name,
            &self.branding.domain,
            Utc::now(),
        );
        Ok((ics::ics_filename(&event.title), body))
    }

    pub async fn create(
        &self,
        actor: &Profile,
        payload: &CreateEventPayload,
    ) -> Result<Event, AppError> {
        if !rbac::can_manage_events(actor) {
            return Err(AppError::Forbidden);
        }

        let event = self.event_repo.create(actor.id, payload).await?;
        tracing::info!("✅ Evento criado: {}", event.title);
        Ok(event)
    }

    pub async fn update(
        &self,
        actor: &Profile,
        id: Uuid,
        payload: &UpdateEventPayload,
    ) -> Result<Event, AppError> {
        if !rbac::can_manage_events(actor) {
            return Err(AppError::Forbidden);
        }

        self.event_repo
            .update(id, payload)
            .await?
            .ok_or(AppError::EventNotFound)
    }

    pub async fn delete(&self, actor: &Profile, id: Uuid) -> Result<(), AppError> {
        if !rbac::can_manage_events(actor) {
            return Err(AppError::Forbidden);
        }

        let deleted = self.event_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::EventNotFound);
        }
        Ok(())
    }
}
