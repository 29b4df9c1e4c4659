// src/handlers/events.rs

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::event::{CreateEventPayload, Event, EventFilter, UpdateEventPayload},
};

// GET /api/events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    params(EventFilter),
    responses(
        (status = 200, description = "Agenda pública, filtrável por tempo e categoria", body = Vec<Event>)
    )
)]
pub async fn list_events(
    State(app_state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state.event_service.list_public(&filter).await?;
    Ok((StatusCode::OK, Json(events)))
}

// GET /api/events/{id}
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento encontrado", body = Event),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn get_event(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state.event_service.get(id).await?;
    Ok((StatusCode::OK, Json(event)))
}

// GET /api/events/{id}/ics
#[utoipa::path(
    get,
    path = "/api/events/{id}/ics",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento em formato iCalendar", content_type = "text/calendar"),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn download_event_ics(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (filename, body) = app_state.event_service.ics_download(id).await?;

    let disposition = format!("attachment; filename=\"{}\"", filename);
    let headers = [
        (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
        (header::CONTENT_DISPOSITION, disposition.as_str()),
    ];
    Ok((headers, body).into_response())
}

// POST /api/admin/events
#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = "Events",
    request_body = CreateEventPayload,
    responses(
        (status = 201, description = "Evento criado", body = Event),
        (status = 403, description = "Papel do chamador não gerencia eventos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_event(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Json(payload): Json<CreateEventPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let event = app_state.event_service.create(&actor, &payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

// PUT /api/admin/events/{id}
#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    tag = "Events",
    request_body = UpdateEventPayload,
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento atualizado", body = Event),
        (status = 403, description = "Papel do chamador não gerencia eventos"),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_event(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let event = app_state
        .event_service
        .update(&actor, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(event)))
}

// DELETE /api/admin/events/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 204, description = "Evento removido"),
        (status = 403, description = "Papel do chamador não gerencia eventos"),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_event(
    State(app_state): State<AppState>,
    AuthenticatedProfile(actor): AuthenticatedProfile,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.event_service.delete(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
