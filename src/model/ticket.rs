use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::event::EventDto;

/// Closed set of ticket categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketKind {
    #[serde(rename = "VIP")]
    Vip,
    #[serde(rename = "COMMON")]
    Common,
    #[serde(rename = "HALF-PRICE")]
    HalfPrice,
}

impl TicketKind {
    /// Textual values accepted on the wire and stored in the database.
    pub const VALUES: [&'static str; 3] = ["VIP", "COMMON", "HALF-PRICE"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vip => "VIP",
            Self::Common => "COMMON",
            Self::HalfPrice => "HALF-PRICE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "VIP" => Some(Self::Vip),
            "COMMON" => Some(Self::Common),
            "HALF-PRICE" => Some(Self::HalfPrice),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    #[serde(rename = "eventoId")]
    pub event_id: i32,
    #[serde(rename = "tipo")]
    pub kind: TicketKind,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    /// Event the ticket belongs to; omitted when nested inside an event.
    #[serde(rename = "evento", default, skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub event: Option<Box<EventDto>>,
}

/// Request body for `POST /ingressos` and `PUT /ingressos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketRequestDto {
    #[serde(rename = "eventoId")]
    pub event_id: i32,
    #[serde(rename = "tipo")]
    pub kind: TicketKind,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
}
