use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{event::EventRepository, ticket::TicketRepository},
    error::AppError,
    model::ticket::{TicketParams, TicketWithEvent},
    service::event::EVENT_NOT_FOUND,
};

const TICKET_NOT_FOUND: &str = "Ingresso não encontrado";

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TicketWithEvent>, AppError> {
        Ok(TicketRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TicketWithEvent, AppError> {
        TicketRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TICKET_NOT_FOUND.to_string()))
    }

    /// Validates the payload and creates a ticket for an existing event
    ///
    /// # Returns
    /// - `Ok(TicketWithEvent)` - The created ticket with its event
    /// - `Err(AppError::Validation)` - The payload failed validation
    /// - `Err(AppError::NotFound)` - The referenced event does not exist
    pub async fn create(&self, payload: &Value) -> Result<TicketWithEvent, AppError> {
        let params = TicketParams::from_payload(payload)?;

        if !EventRepository::new(self.db).exists(params.event_id).await? {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        Ok(TicketRepository::new(self.db).create(params).await?)
    }

    /// Replaces a ticket with the validated payload
    ///
    /// The referenced event is only checked again when the payload moves the ticket
    /// to another event.
    ///
    /// # Returns
    /// - `Ok(TicketWithEvent)` - The updated ticket with its event
    /// - `Err(AppError::NotFound)` - The ticket or the new event does not exist
    /// - `Err(AppError::Validation)` - The payload failed validation
    pub async fn update(&self, id: i32, payload: &Value) -> Result<TicketWithEvent, AppError> {
        let repo = TicketRepository::new(self.db);

        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TICKET_NOT_FOUND.to_string()))?;

        let params = TicketParams::from_payload(payload)?;

        if params.event_id != current.ticket.event_id
            && !EventRepository::new(self.db).exists(params.event_id).await?
        {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        Ok(repo.update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TicketRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(TICKET_NOT_FOUND.to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
