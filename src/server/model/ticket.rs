//! Ticket domain model and write parameters.

use sea_orm::DbErr;
use serde_json::Value;
use std::sync::LazyLock;

use crate::{
    model::ticket::{TicketDto, TicketKind},
    server::{
        model::event::Event,
        validation::{
            constraint::{IsInteger, IsNumber, IsString, OneOf, Positive},
            Field, Schema, ValidationErrors,
        },
    },
};

const KIND_MESSAGE: &str = "Tipo deve ser VIP, COMMON ou HALF-PRICE";

static TICKET_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            Field::required("eventoId", "ID do evento é obrigatório")
                .rule(IsNumber::new("ID do evento deve ser um número"))
                .rule(IsInteger::new("ID do evento deve ser um número inteiro"))
                .rule(Positive::new("ID do evento deve ser positivo")),
        )
        .field(
            Field::required("tipo", "Tipo é obrigatório")
                .rule(IsString::new("Tipo deve ser um texto"))
                .rule(OneOf::new(&TicketKind::VALUES, KIND_MESSAGE)),
        )
        .field(
            Field::required("preco", "Preço é obrigatório")
                .rule(IsNumber::new("Preço deve ser um número"))
                .rule(Positive::new("Preço deve ser um número positivo")),
        )
        .field(
            Field::required("quantidade", "Quantidade é obrigatória")
                .rule(IsNumber::new("Quantidade deve ser um número"))
                .rule(IsInteger::new("Quantidade deve ser um número inteiro"))
                .rule(Positive::new("Quantidade deve ser um número positivo")),
        )
});

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub event_id: i32,
    pub kind: TicketKind,
    pub price: f64,
    pub quantity: i32,
}

impl Ticket {
    /// Converts an entity model into the domain model.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Converted ticket
    /// - `Err(DbErr::Type)` - The stored kind is not one of the known ticket kinds
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        let kind = TicketKind::parse(&entity.kind).ok_or_else(|| {
            DbErr::Type(format!(
                "Unknown ticket kind '{}' for ticket {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            kind,
            price: entity.price,
            quantity: entity.quantity,
        })
    }

    /// Converts to a DTO without the embedded event.
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            event_id: self.event_id,
            kind: self.kind,
            price: self.price,
            quantity: self.quantity,
            event: None,
        }
    }
}

/// Ticket with the event it grants access to.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithEvent {
    pub ticket: Ticket,
    pub event: Event,
}

impl TicketWithEvent {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            event: Some(Box::new(self.event.into_dto())),
            ..self.ticket.into_dto()
        }
    }
}

/// Validated field set used both to create and to fully replace a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketParams {
    pub event_id: i32,
    pub kind: TicketKind,
    pub price: f64,
    pub quantity: i32,
}

impl TicketParams {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let fields = TICKET_SCHEMA.validate(payload)?;

        let kind = TicketKind::parse(&fields.string("tipo")?)
            .ok_or_else(|| ValidationErrors(vec![KIND_MESSAGE.to_string()]))?;

        Ok(Self {
            event_id: fields.integer("eventoId")?,
            kind,
            price: fields.number("preco")?,
            quantity: fields.integer("quantidade")?,
        })
    }
}
