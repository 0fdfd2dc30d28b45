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
        ticket::{TicketDto, TicketRequestDto},
    },
    server::{
        error::{AppError, StorageContext},
        service::ticket::TicketService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ingressos";

/// List every ticket with its event.
#[utoipa::path(
    get,
    path = "/ingressos",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "Every ticket with its event", body = Vec<TicketDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tickets = TicketService::new(&state.db)
        .get_all()
        .await
        .storage_context("Erro ao buscar ingressos")?;

    let tickets: Vec<TicketDto> = tickets.into_iter().map(|t| t.into_dto()).collect();

    Ok(Json(tickets))
}

/// Get one ticket with its event.
#[utoipa::path(
    get,
    path = "/ingressos/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "The ticket with its event", body = TicketDto),
        (status = 400, description = "Non-numeric ID", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let ticket = TicketService::new(&state.db)
        .get_by_id(id)
        .await
        .storage_context("Erro ao buscar ingresso")?;

    Ok(Json(ticket.into_dto()))
}

/// Create a ticket for an existing event.
///
/// # Returns
/// - `201 Created` - The created ticket with its event embedded
/// - `400 Bad Request` - One message per violated rule
/// - `404 Not Found` - The referenced event does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/ingressos",
    tag = TICKET_TAG,
    request_body = TicketRequestDto,
    responses(
        (status = 201, description = "Successfully created ticket", body = TicketDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let ticket = TicketService::new(&state.db)
        .create(&payload)
        .await
        .storage_context("Erro ao criar ingresso")?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Replace a ticket, optionally moving it to another event.
#[utoipa::path(
    put,
    path = "/ingressos/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = TicketRequestDto,
    responses(
        (status = 200, description = "Successfully updated ticket", body = TicketDto),
        (status = 400, description = "Non-numeric ID or invalid ticket data", body = ErrorDto),
        (status = 404, description = "Ticket or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;

    let ticket = TicketService::new(&state.db)
        .update(id, &payload)
        .await
        .storage_context("Erro ao atualizar ingresso")?;

    Ok(Json(ticket.into_dto()))
}

/// Delete a ticket.
#[utoipa::path(
    delete,
    path = "/ingressos/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Successfully deleted ticket"),
        (status = 400, description = "Non-numeric ID", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    TicketService::new(&state.db)
        .delete(id)
        .await
        .storage_context("Erro ao deletar ingresso")?;

    Ok(StatusCode::NO_CONTENT)
}
