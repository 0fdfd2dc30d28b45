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
        artist::{ArtistDto, ArtistRequestDto},
    },
    server::{
        error::{AppError, StorageContext},
        service::artist::ArtistService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping artist endpoints in OpenAPI documentation
pub static ARTIST_TAG: &str = "artistas";

/// List every artist.
///
/// # Returns
/// - `200 OK` - Every artist ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/artistas",
    tag = ARTIST_TAG,
    responses(
        (status = 200, description = "Every artist", body = Vec<ArtistDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artists(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let artists = ArtistService::new(&state.db)
        .get_all()
        .await
        .storage_context("Erro ao buscar artistas")?;

    let artists: Vec<ArtistDto> = artists.into_iter().map(|a| a.into_dto()).collect();

    Ok(Json(artists))
}

/// Get one artist by ID.
///
/// # Returns
/// - `200 OK` - The artist
/// - `400 Bad Request` - Non-numeric ID
/// - `404 Not Found` - No artist has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/artistas/{id}",
    tag = ARTIST_TAG,
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "The artist", body = ArtistDto),
        (status = 400, description = "Non-numeric ID", body = ErrorDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let artist = ArtistService::new(&state.db)
        .get_by_id(id)
        .await
        .storage_context("Erro ao buscar artista")?;

    Ok(Json(artist.into_dto()))
}

/// Create an artist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Raw JSON body, validated against the artist schema
///
/// # Returns
/// - `201 Created` - The created artist
/// - `400 Bad Request` - One message per violated rule
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/artistas",
    tag = ARTIST_TAG,
    request_body = ArtistRequestDto,
    responses(
        (status = 201, description = "Successfully created artist", body = ArtistDto),
        (status = 400, description = "Invalid artist data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artist(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let artist = ArtistService::new(&state.db)
        .create(&payload)
        .await
        .storage_context("Erro ao criar artista")?;

    Ok((StatusCode::CREATED, Json(artist.into_dto())))
}

/// Replace an artist.
///
/// # Returns
/// - `200 OK` - The updated artist
/// - `400 Bad Request` - Non-numeric ID or invalid artist data
/// - `404 Not Found` - No artist has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/artistas/{id}",
    tag = ARTIST_TAG,
    params(("id" = i32, Path, description = "Artist ID")),
    request_body = ArtistRequestDto,
    responses(
        (status = 200, description = "Successfully updated artist", body = ArtistDto),
        (status = 400, description = "Non-numeric ID or invalid artist data", body = ErrorDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;

    let artist = ArtistService::new(&state.db)
        .update(id, &payload)
        .await
        .storage_context("Erro ao atualizar artista")?;

    Ok(Json(artist.into_dto()))
}

/// Delete an artist and its event links.
///
/// # Returns
/// - `204 No Content` - Artist deleted
/// - `400 Bad Request` - Non-numeric ID
/// - `404 Not Found` - No artist has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/artistas/{id}",
    tag = ARTIST_TAG,
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 204, description = "Successfully deleted artist"),
        (status = 400, description = "Non-numeric ID", body = ErrorDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    ArtistService::new(&state.db)
        .delete(id)
        .await
        .storage_context("Erro ao deletar artista")?;

    Ok(StatusCode::NO_CONTENT)
}
