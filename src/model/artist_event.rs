use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{artist::ArtistDto, event::EventDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistEventDto {
    #[serde(rename = "artistaId")]
    pub artist_id: i32,
    #[serde(rename = "eventoId")]
    pub event_id: i32,
    #[serde(rename = "artista")]
    pub artist: ArtistDto,
    #[serde(rename = "evento")]
    pub event: EventDto,
}

/// Request body for `POST /artistas-eventos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistEventRequestDto {
    #[serde(rename = "artistaId")]
    pub artist_id: i32,
    #[serde(rename = "eventoId")]
    pub event_id: i32,
}
