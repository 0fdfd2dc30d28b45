use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{Event, EventParams, EventWithRelations},
};

pub(crate) const EVENT_NOT_FOUND: &str = "Evento não encontrado";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every event with its line-up and tickets
    pub async fn get_all(&self) -> Result<Vec<EventWithRelations>, AppError> {
        Ok(EventRepository::new(self.db).get_all_with_relations().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<EventWithRelations, AppError> {
        EventRepository::new(self.db)
            .find_by_id_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))
    }

    pub async fn create(&self, payload: &Value) -> Result<Event, AppError> {
        let params = EventParams::from_payload(payload)?;

        Ok(EventRepository::new(self.db).create(params).await?)
    }

    /// Replaces an event with the validated payload
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::NotFound)` - No event has this ID
    /// - `Err(AppError::Validation)` - The payload failed validation
    pub async fn update(&self, id: i32, payload: &Value) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        let params = EventParams::from_payload(payload)?;

        Ok(repo.update(id, params).await?)
    }

    /// Deletes an event; its tickets and artist links go with it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
