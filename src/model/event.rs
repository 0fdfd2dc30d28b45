use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{artist::ArtistDto, ticket::TicketDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataHora")]
    pub starts_at: DateTime<Utc>,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "preco_base")]
    pub base_price: f64,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// Line-up, only present on the event listing.
    #[serde(rename = "artistas", default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<EventArtistDto>>,
    /// Tickets on sale, only present on the event listing.
    #[serde(rename = "ingressos", default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<TicketDto>>,
}

/// Artist entry of an event line-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventArtistDto {
    #[serde(rename = "artistaId")]
    pub artist_id: i32,
    #[serde(rename = "eventoId")]
    pub event_id: i32,
    #[serde(rename = "artista")]
    pub artist: ArtistDto,
}

/// Request body for `POST /eventos` and `PUT /eventos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventRequestDto {
    #[serde(rename = "nome")]
    pub name: String,
    /// ISO-8601 instant, e.g. `2026-03-14T21:00:00Z`.
    #[serde(rename = "dataHora")]
    pub starts_at: String,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "preco_base")]
    pub base_price: f64,
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
