//! Artist factory for creating test artist entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test artists with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let artist = ArtistFactory::new(&db).name("Anitta").genre("Pop").build().await?;
/// ```
pub struct ArtistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    genre: String,
}

impl<'a> ArtistFactory<'a> {
    /// Creates a new ArtistFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Artist {id}"` where id is auto-incremented
    /// - genre: `"Rock"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Artist {}", id),
            genre: "Rock".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Builds and inserts the artist entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::artist::Model)` - Created artist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::artist::Model, DbErr> {
        entity::artist::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            genre: ActiveValue::Set(self.genre),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an artist with default values.
pub async fn create_artist(db: &DatabaseConnection) -> Result<entity::artist::Model, DbErr> {
    ArtistFactory::new(db).build().await
}
