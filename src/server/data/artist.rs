//! Artist data repository for database operations.
//!
//! Provides the `ArtistRepository` for creating, reading, updating and deleting artists,
//! converting entity models into domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::artist::{Artist, ArtistParams};

/// Repository providing database operations for artist management.
pub struct ArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistRepository<'a> {
    /// Creates a new ArtistRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every artist ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Artist>, DbErr> {
        let artists = entity::prelude::Artist::find()
            .order_by_asc(entity::artist::Column::Id)
            .all(self.db)
            .await?;

        Ok(artists.into_iter().map(Artist::from_entity).collect())
    }

    /// Finds an artist by ID
    ///
    /// # Returns
    /// - `Ok(Some(Artist))` - The artist exists
    /// - `Ok(None)` - No artist has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Artist>, DbErr> {
        let artist = entity::prelude::Artist::find_by_id(id).one(self.db).await?;

        Ok(artist.map(Artist::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Artist::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Inserts a new artist and returns it with its generated ID.
    pub async fn create(&self, params: ArtistParams) -> Result<Artist, DbErr> {
        let artist = entity::artist::ActiveModel {
            name: ActiveValue::Set(params.name),
            genre: ActiveValue::Set(params.genre),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Artist::from_entity(artist))
    }

    /// Replaces every field of an existing artist.
    ///
    /// # Returns
    /// - `Ok(Artist)` - The updated artist
    /// - `Err(DbErr::RecordNotUpdated)` - No artist has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: ArtistParams) -> Result<Artist, DbErr> {
        let artist = entity::artist::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            genre: ActiveValue::Set(params.genre),
        }
        .update(self.db)
        .await?;

        Ok(Artist::from_entity(artist))
    }

    /// Deletes an artist; its event links are removed by the cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Artist::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
