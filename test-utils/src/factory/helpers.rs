//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an artist and an event and links them together.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((artist, event, link))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_linked_artist_and_event(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::artist::Model,
        entity::event::Model,
        entity::artist_event::Model,
    ),
    DbErr,
> {
    let artist = crate::factory::artist::create_artist(db).await?;
    let event = crate::factory::event::create_event(db).await?;
    let link = crate::factory::artist_event::create_artist_event(db, artist.id, event.id).await?;

    Ok((artist, event, link))
}
