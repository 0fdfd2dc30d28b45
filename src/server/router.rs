use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{artist, artist_event, event, mail, ticket},
    state::AppState,
};

const INDEX_MESSAGE: &str = "API de Gestão de Eventos";

#[derive(OpenApi)]
#[openapi(
    info(title = "API de Gestão de Eventos", description = "Artistas, eventos, ingressos e envio de e-mail"),
    tags(
        (name = "artistas", description = "Artist management"),
        (name = "eventos", description = "Event management"),
        (name = "artistas-eventos", description = "Event line-ups"),
        (name = "ingressos", description = "Ticket management"),
        (name = "mail", description = "Outbound e-mail")
    )
)]
struct ApiDoc;

/// Builds the application router with OpenAPI documentation served under `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(artist::get_artists, artist::create_artist))
        .routes(routes!(
            artist::get_artist,
            artist::update_artist,
            artist::delete_artist
        ))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(
            artist_event::get_artist_events,
            artist_event::create_artist_event
        ))
        .routes(routes!(artist_event::delete_artist_event))
        .routes(routes!(ticket::get_tickets, ticket::create_ticket))
        .routes(routes!(
            ticket::get_ticket,
            ticket::update_ticket,
            ticket::delete_ticket
        ))
        .routes(routes!(mail::send_mail))
        .split_for_parts();

    router
        .route("/", get(index))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}

async fn index() -> &'static str {
    INDEX_MESSAGE
}
