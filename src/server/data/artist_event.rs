//! Artist-event link repository.
//!
//! Links are identified by their `(artist_id, event_id)` composite key and are always
//! returned with both the artist and the event loaded.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    artist::Artist,
    artist_event::{ArtistEventLink, ArtistEventParams},
    event::Event,
};

pub struct ArtistEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every link with its artist and event, ordered by event then artist.
    ///
    /// # Returns
    /// - `Ok(Vec<ArtistEventLink>)` - Every link, empty when nothing is linked
    /// - `Err(DbErr::RecordNotFound)` - A link points at a missing artist or event
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ArtistEventLink>, DbErr> {
        let links = entity::prelude::ArtistEvent::find()
            .order_by_asc(entity::artist_event::Column::EventId)
            .order_by_asc(entity::artist_event::Column::ArtistId)
            .find_also_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        let event_ids: Vec<i32> = links.iter().map(|(link, _)| link.event_id).collect();
        let events_map: HashMap<i32, entity::event::Model> = if !event_ids.is_empty() {
            entity::prelude::Event::find()
                .filter(entity::event::Column::Id.is_in(event_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|e| (e.id, e))
                .collect()
        } else {
            HashMap::new()
        };

        links
            .into_iter()
            .map(|(link, artist)| {
                let artist = artist.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Artist {} of link to event {} not found",
                        link.artist_id, link.event_id
                    ))
                })?;
                let event = events_map.get(&link.event_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Event {} of link to artist {} not found",
                        link.event_id, link.artist_id
                    ))
                })?;

                Ok(ArtistEventLink {
                    artist: Artist::from_entity(artist),
                    event: Event::from_entity(event),
                })
            })
            .collect()
    }

    /// Finds a link by its composite key.
    ///
    /// # Returns
    /// - `Ok(Some(ArtistEventLink))` - The link exists
    /// - `Ok(None)` - The artist is not linked to the event
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        artist_id: i32,
        event_id: i32,
    ) -> Result<Option<ArtistEventLink>, DbErr> {
        if !self.exists(artist_id, event_id).await? {
            return Ok(None);
        }

        let artist = entity::prelude::Artist::find_by_id(artist_id)
            .one(self.db)
            .await?;
        let event = entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?;

        Ok(artist.zip(event).map(|(artist, event)| ArtistEventLink {
            artist: Artist::from_entity(artist),
            event: Event::from_entity(event),
        }))
    }

    pub async fn exists(&self, artist_id: i32, event_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ArtistEvent::find_by_id((artist_id, event_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Links an artist to an event and returns the link with both sides loaded.
    ///
    /// # Returns
    /// - `Ok(ArtistEventLink)` - The created link
    /// - `Err(DbErr)` - Database error, including a duplicate key or a missing artist
    ///   or event rejected by the foreign keys
    pub async fn create(&self, params: ArtistEventParams) -> Result<ArtistEventLink, DbErr> {
        entity::artist_event::ActiveModel {
            artist_id: ActiveValue::Set(params.artist_id),
            event_id: ActiveValue::Set(params.event_id),
        }
        .insert(self.db)
        .await?;

        self.find_by_id(params.artist_id, params.event_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Link between artist {} and event {} not found after creation",
                params.artist_id, params.event_id
            )))
    }

    pub async fn delete(&self, artist_id: i32, event_id: i32) -> Result<(), DbErr> {
        entity::prelude::ArtistEvent::delete_by_id((artist_id, event_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
