use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::artist::ArtistRepository,
    error::AppError,
    model::artist::{Artist, ArtistParams},
};

const ARTIST_NOT_FOUND: &str = "Artista não encontrado";

pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Artist>, AppError> {
        Ok(ArtistRepository::new(self.db).get_all().await?)
    }

    /// Gets an artist by ID
    ///
    /// # Returns
    /// - `Ok(Artist)` - The artist
    /// - `Err(AppError::NotFound)` - No artist has this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Artist, AppError> {
        ArtistRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(ARTIST_NOT_FOUND.to_string()))
    }

    /// Validates the payload and inserts a new artist
    pub async fn create(&self, payload: &Value) -> Result<Artist, AppError> {
        let params = ArtistParams::from_payload(payload)?;

        Ok(ArtistRepository::new(self.db).create(params).await?)
    }

    /// Replaces an artist with the validated payload
    ///
    /// The artist must exist before the payload is validated.
    ///
    /// # Returns
    /// - `Ok(Artist)` - The updated artist
    /// - `Err(AppError::NotFound)` - No artist has this ID
    /// - `Err(AppError::Validation)` - The payload failed validation
    pub async fn update(&self, id: i32, payload: &Value) -> Result<Artist, AppError> {
        let repo = ArtistRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(ARTIST_NOT_FOUND.to_string()));
        }

        let params = ArtistParams::from_payload(payload)?;

        Ok(repo.update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ArtistRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(ARTIST_NOT_FOUND.to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
