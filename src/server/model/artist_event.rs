//! Artist-event link domain model and write parameters.

use serde_json::Value;
use std::sync::LazyLock;

use crate::{
    model::artist_event::ArtistEventDto,
    server::{
        model::{artist::Artist, event::Event},
        validation::{
            constraint::{IsInteger, IsNumber, Positive},
            Field, Schema, ValidationErrors,
        },
    },
};

static ARTIST_EVENT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            Field::required("artistaId", "ID do artista é obrigatório")
                .rule(IsNumber::new("ID do artista deve ser um número"))
                .rule(IsInteger::new("ID do artista deve ser um número inteiro"))
                .rule(Positive::new("ID do artista deve ser positivo")),
        )
        .field(
            Field::required("eventoId", "ID do evento é obrigatório")
                .rule(IsNumber::new("ID do evento deve ser um número"))
                .rule(IsInteger::new("ID do evento deve ser um número inteiro"))
                .rule(Positive::new("ID do evento deve ser positivo")),
        )
});

/// Link between an artist and an event with both sides loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistEventLink {
    pub artist: Artist,
    pub event: Event,
}

impl ArtistEventLink {
    pub fn into_dto(self) -> ArtistEventDto {
        ArtistEventDto {
            artist_id: self.artist.id,
            event_id: self.event.id,
            artist: self.artist.into_dto(),
            event: self.event.into_dto(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistEventParams {
    pub artist_id: i32,
    pub event_id: i32,
}

impl ArtistEventParams {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let fields = ARTIST_EVENT_SCHEMA.validate(payload)?;

        Ok(Self {
            artist_id: fields.integer("artistaId")?,
            event_id: fields.integer("eventoId")?,
        })
    }
}
