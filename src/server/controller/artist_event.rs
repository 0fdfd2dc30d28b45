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
        artist_event::{ArtistEventDto, ArtistEventRequestDto},
    },
    server::{
        error::{AppError, StorageContext},
        service::artist_event::ArtistEventService,
        state::AppState,
        util::parse::parse_id_pair,
    },
};

/// Tag for grouping artist-event link endpoints in OpenAPI documentation
pub static ARTIST_EVENT_TAG: &str = "artistas-eventos";

/// List every artist-event link with both sides embedded.
#[utoipa::path(
    get,
    path = "/artistas-eventos",
    tag = ARTIST_EVENT_TAG,
    responses(
        (status = 200, description = "Every link with artist and event", body = Vec<ArtistEventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artist_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let links = ArtistEventService::new(&state.db)
        .get_all()
        .await
        .storage_context("Erro ao buscar associações artista-evento")?;

    let links: Vec<ArtistEventDto> = links.into_iter().map(|l| l.into_dto()).collect();

    Ok(Json(links))
}

/// Link an artist to an event.
///
/// # Returns
/// - `201 Created` - The link with artist and event embedded
/// - `400 Bad Request` - Invalid IDs in the body
/// - `404 Not Found` - The artist or the event does not exist
/// - `409 Conflict` - The artist is already linked to the event
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/artistas-eventos",
    tag = ARTIST_EVENT_TAG,
    request_body = ArtistEventRequestDto,
    responses(
        (status = 201, description = "Successfully linked artist to event", body = ArtistEventDto),
        (status = 400, description = "Invalid link data", body = ErrorDto),
        (status = 404, description = "Artist or event not found", body = ErrorDto),
        (status = 409, description = "Artist already linked to event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artist_event(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let link = ArtistEventService::new(&state.db)
        .create(&payload)
        .await
        .storage_context("Erro ao associar artista ao evento")?;

    Ok((StatusCode::CREATED, Json(link.into_dto())))
}

/// Remove an artist from an event.
#[utoipa::path(
    delete,
    path = "/artistas-eventos/{artista_id}/{evento_id}",
    tag = ARTIST_EVENT_TAG,
    params(
        ("artista_id" = i32, Path, description = "Artist ID"),
        ("evento_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Successfully removed link"),
        (status = 400, description = "Non-numeric IDs", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artist_event(
    State(state): State<AppState>,
    Path((artist_id, event_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (artist_id, event_id) = parse_id_pair(&artist_id, &event_id)?;

    ArtistEventService::new(&state.db)
        .delete(artist_id, event_id)
        .await
        .storage_context("Erro ao remover associação")?;

    Ok(StatusCode::NO_CONTENT)
}
