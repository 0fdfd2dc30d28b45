//! Event data repository for database operations.
//!
//! Provides the `EventRepository` for managing events. Listing and single reads load the
//! event's line-up and tickets in batched queries and group them per event.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    artist::Artist,
    event::{Event, EventParams, EventWithRelations},
    ticket::Ticket,
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every event ordered by ID with its linked artists and tickets.
    ///
    /// # Returns
    /// - `Ok(Vec<EventWithRelations>)` - Events with line-up and tickets, empty collections
    ///   when an event has none
    /// - `Err(DbErr::Type)` - A stored ticket has an unknown kind
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_relations(&self) -> Result<Vec<EventWithRelations>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(events).await
    }

    /// Finds an event by ID with its linked artists and tickets.
    pub async fn find_by_id_with_relations(
        &self,
        id: i32,
    ) -> Result<Option<EventWithRelations>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![event]).await?.pop())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn create(&self, params: EventParams) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(params.name),
            starts_at: ActiveValue::Set(params.starts_at),
            venue: ActiveValue::Set(params.venue),
            base_price: ActiveValue::Set(params.base_price),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(event))
    }

    /// Replaces every field of an existing event; an absent description clears it.
    pub async fn update(&self, id: i32, params: EventParams) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            starts_at: ActiveValue::Set(params.starts_at),
            venue: ActiveValue::Set(params.venue),
            base_price: ActiveValue::Set(params.base_price),
            description: ActiveValue::Set(params.description),
        }
        .update(self.db)
        .await?;

        Ok(Event::from_entity(event))
    }

    /// Deletes an event together with its tickets and artist links.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn load_relations(
        &self,
        events: Vec<entity::event::Model>,
    ) -> Result<Vec<EventWithRelations>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();

        // Fetch line-ups in one query
        let links = entity::prelude::ArtistEvent::find()
            .filter(entity::artist_event::Column::EventId.is_in(event_ids.clone()))
            .order_by_asc(entity::artist_event::Column::ArtistId)
            .find_also_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        let mut artists_by_event: HashMap<i32, Vec<Artist>> = HashMap::new();
        for (link, artist) in links {
            if let Some(artist) = artist {
                artists_by_event
                    .entry(link.event_id)
                    .or_default()
                    .push(Artist::from_entity(artist));
            }
        }

        // Fetch tickets in one query
        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::EventId.is_in(event_ids))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        let mut tickets_by_event: HashMap<i32, Vec<Ticket>> = HashMap::new();
        for ticket in tickets {
            let ticket = Ticket::from_entity(ticket)?;
            tickets_by_event
                .entry(ticket.event_id)
                .or_default()
                .push(ticket);
        }

        Ok(events
            .into_iter()
            .map(|event| EventWithRelations {
                artists: artists_by_event.remove(&event.id).unwrap_or_default(),
                tickets: tickets_by_event.remove(&event.id).unwrap_or_default(),
                event: Event::from_entity(event),
            })
            .collect())
    }
}
