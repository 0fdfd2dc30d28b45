//! Event domain model, its eager-loaded form and write parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::LazyLock;

use crate::{
    model::event::{EventArtistDto, EventDto},
    server::{
        model::{artist::Artist, ticket::Ticket},
        validation::{
            constraint::{self, IsNumber, IsString, MinLength, Positive},
            Field, Schema, ValidationErrors,
        },
    },
};

static EVENT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            Field::required("nome", "Nome é obrigatório")
                .rule(IsString::new("Nome deve ser um texto"))
                .rule(MinLength::new(3, "Nome deve ter pelo menos 3 caracteres")),
        )
        .field(
            Field::required("dataHora", "Data é obrigatória")
                .rule(IsString::new("Data deve ser um datetime válido"))
                .rule(constraint::DateTime::new("Data deve ser um datetime válido")),
        )
        .field(
            Field::required("local", "Local é obrigatório")
                .rule(IsString::new("Local deve ser um texto"))
                .rule(MinLength::new(3, "Local deve ter pelo menos 3 caracteres")),
        )
        .field(
            Field::required("preco_base", "Preço base é obrigatório")
                .rule(IsNumber::new("Preço base deve ser um número"))
                .rule(Positive::new("Preço base deve ser um número positivo")),
        )
        .field(Field::optional("descricao").rule(IsString::new("Descrição deve ser um texto")))
});

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub venue: String,
    pub base_price: f64,
    pub description: Option<String>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            starts_at: entity.starts_at,
            venue: entity.venue,
            base_price: entity.base_price,
            description: entity.description,
        }
    }

    /// Converts to a DTO without the line-up and ticket collections.
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            starts_at: self.starts_at,
            venue: self.venue,
            base_price: self.base_price,
            description: self.description,
            artists: None,
            tickets: None,
        }
    }
}

/// Event with its line-up and tickets, as returned by the event listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWithRelations {
    pub event: Event,
    pub artists: Vec<Artist>,
    pub tickets: Vec<Ticket>,
}

impl EventWithRelations {
    pub fn into_dto(self) -> EventDto {
        let event_id = self.event.id;

        let artists = self
            .artists
            .into_iter()
            .map(|artist| EventArtistDto {
                artist_id: artist.id,
                event_id,
                artist: artist.into_dto(),
            })
            .collect();
        let tickets = self.tickets.into_iter().map(Ticket::into_dto).collect();

        EventDto {
            artists: Some(artists),
            tickets: Some(tickets),
            ..self.event.into_dto()
        }
    }
}

/// Validated field set used both to create and to fully replace an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventParams {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub venue: String,
    pub base_price: f64,
    pub description: Option<String>,
}

impl EventParams {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let fields = EVENT_SCHEMA.validate(payload)?;

        Ok(Self {
            name: fields.string("nome")?,
            starts_at: fields.date_time("dataHora")?,
            venue: fields.string("local")?,
            base_price: fields.number("preco_base")?,
            description: fields.optional_string("descricao")?,
        })
    }
}
