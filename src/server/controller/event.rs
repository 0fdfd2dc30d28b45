use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, EventRequestDto},
    },
    server::{
        error::{AppError, StorageContext},
        service::event::EventService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "eventos";

/// List every event with its line-up and tickets.
///
/// # Returns
/// - `200 OK` - Every event with `artistas` and `ingressos`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/eventos",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Every event with line-up and tickets", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_all()
        .await
        .storage_context("Erro ao buscar eventos")?;

    let events: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok(Json(events))
}

/// Get one event with its line-up and tickets.
#[utoipa::path(
    get,
    path = "/eventos/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event with line-up and tickets", body = EventDto),
        (status = 400, description = "Non-numeric ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let event = EventService::new(&state.db)
        .get_by_id(id)
        .await
        .storage_context("Erro ao buscar evento")?;

    Ok(Json(event.into_dto()))
}

/// Create an event.
///
/// `dataHora` must be a UTC instant such as `2026-03-14T21:00:00Z`.
///
/// # Returns
/// - `201 Created` - The created event, without relations
/// - `400 Bad Request` - One message per violated rule
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/eventos",
    tag = EVENT_TAG,
    request_body = EventRequestDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let event = EventService::new(&state.db)
        .create(&payload)
        .await
        .storage_context("Erro ao criar evento")?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Replace an event.
///
/// Omitting `descricao` clears it.
#[utoipa::path(
    put,
    path = "/eventos/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = EventRequestDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Non-numeric ID or invalid event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;

    let event = EventService::new(&state.db)
        .update(id, &payload)
        .await
        .storage_context("Erro ao atualizar evento")?;

    Ok(Json(event.into_dto()))
}

/// Delete an event together with its tickets and artist links.
#[utoipa::path(
    delete,
    path = "/eventos/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 400, description = "Non-numeric ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    EventService::new(&state.db)
        .delete(id)
        .await
        .storage_context("Erro ao deletar evento")?;

    Ok(StatusCode::NO_CONTENT)
}
