use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{artist::ArtistRepository, artist_event::ArtistEventRepository, event::EventRepository},
    error::AppError,
    model::artist_event::{ArtistEventLink, ArtistEventParams},
};

const ARTIST_OR_EVENT_NOT_FOUND: &str = "Artista ou Evento não encontrado";
const LINK_NOT_FOUND: &str = "Associação não encontrada";
const ALREADY_LINKED: &str = "Artista já associado a este evento";

pub struct ArtistEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ArtistEventLink>, AppError> {
        Ok(ArtistEventRepository::new(self.db).get_all().await?)
    }

    /// Links an artist to an event
    ///
    /// # Returns
    /// - `Ok(ArtistEventLink)` - The created link with both sides loaded
    /// - `Err(AppError::Validation)` - The payload failed validation
    /// - `Err(AppError::NotFound)` - The artist or the event does not exist
    /// - `Err(AppError::Conflict)` - The artist is already linked to the event
    pub async fn create(&self, payload: &Value) -> Result<ArtistEventLink, AppError> {
        let params = ArtistEventParams::from_payload(payload)?;

        let artist_repo = ArtistRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);
        let (artist_exists, event_exists) = tokio::join!(
            artist_repo.exists(params.artist_id),
            event_repo.exists(params.event_id)
        );
        if !artist_exists? || !event_exists? {
            return Err(AppError::NotFound(ARTIST_OR_EVENT_NOT_FOUND.to_string()));
        }

        let repo = ArtistEventRepository::new(self.db);
        if repo.exists(params.artist_id, params.event_id).await? {
            return Err(AppError::Conflict(ALREADY_LINKED.to_string()));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn delete(&self, artist_id: i32, event_id: i32) -> Result<(), AppError> {
        let repo = ArtistEventRepository::new(self.db);

        if !repo.exists(artist_id, event_id).await? {
            return Err(AppError::NotFound(LINK_NOT_FOUND.to_string()));
        }

        repo.delete(artist_id, event_id).await?;

        Ok(())
    }
}
