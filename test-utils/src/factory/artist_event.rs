//! Factory for linking an existing artist to an existing event.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an artist-event link.
///
/// Both the artist and the event must already exist, otherwise the foreign key
/// constraint rejects the insert.
///
/// # Returns
/// - `Ok(entity::artist_event::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert
pub async fn create_artist_event(
    db: &DatabaseConnection,
    artist_id: i32,
    event_id: i32,
) -> Result<entity::artist_event::Model, DbErr> {
    entity::artist_event::ActiveModel {
        artist_id: ActiveValue::Set(artist_id),
        event_id: ActiveValue::Set(event_id),
    }
    .insert(db)
    .await
}
