//! Ticket data repository for database operations.
//!
//! Tickets are always read together with the event they belong to. The ticket kind is
//! stored as text and converted to `TicketKind` at this boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::{
    event::Event,
    ticket::{Ticket, TicketParams, TicketWithEvent},
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every ticket ordered by ID with its event.
    pub async fn get_all(&self) -> Result<Vec<TicketWithEvent>, DbErr> {
        entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .find_also_related(entity::prelude::Event)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(ticket, event)| with_event(ticket, event))
            .collect()
    }

    /// Finds a ticket by ID with its event.
    ///
    /// # Returns
    /// - `Ok(Some(TicketWithEvent))` - The ticket exists
    /// - `Ok(None)` - No ticket has this ID
    /// - `Err(DbErr)` - Database error during query or an unknown stored kind
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TicketWithEvent>, DbErr> {
        let result = entity::prelude::Ticket::find_by_id(id)
            .find_also_related(entity::prelude::Event)
            .one(self.db)
            .await?;

        result
            .map(|(ticket, event)| with_event(ticket, event))
            .transpose()
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Ticket::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn create(&self, params: TicketParams) -> Result<TicketWithEvent, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            price: ActiveValue::Set(params.price),
            quantity: ActiveValue::Set(params.quantity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.reload(ticket.id).await
    }

    /// Replaces every field of an existing ticket, including the event it belongs to.
    pub async fn update(&self, id: i32, params: TicketParams) -> Result<TicketWithEvent, DbErr> {
        entity::ticket::ActiveModel {
            id: ActiveValue::Unchanged(id),
            event_id: ActiveValue::Set(params.event_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            price: ActiveValue::Set(params.price),
            quantity: ActiveValue::Set(params.quantity),
        }
        .update(self.db)
        .await?;

        self.reload(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Ticket::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn reload(&self, id: i32) -> Result<TicketWithEvent, DbErr> {
        self.find_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Ticket with id {} not found after write",
            id
        )))
    }
}

fn with_event(
    ticket: entity::ticket::Model,
    event: Option<entity::event::Model>,
) -> Result<TicketWithEvent, DbErr> {
    let event = event.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Event {} of ticket {} not found",
            ticket.event_id, ticket.id
        ))
    })?;

    Ok(TicketWithEvent {
        ticket: Ticket::from_entity(ticket)?,
        event: Event::from_entity(event),
    })
}
