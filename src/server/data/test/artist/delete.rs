use super::*;

/// Tests deleting an artist.
///
/// Expected: Ok with artist removed
#[tokio::test]
async fn deletes_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_artist(db).await?;

    ArtistRepository::new(db).delete(created.id).await?;

    let db_artist = entity::prelude::Artist::find_by_id(created.id).one(db).await?;
    assert!(db_artist.is_none());

    Ok(())
}

/// Tests that deleting an artist removes its event links but keeps the event.
///
/// Expected: Ok with link removed and event intact
#[tokio::test]
async fn cascades_to_event_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (artist, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;

    ArtistRepository::new(db).delete(artist.id).await?;

    let link = entity::prelude::ArtistEvent::find_by_id((artist.id, event.id))
        .one(db)
        .await?;
    assert!(link.is_none());

    let db_event = entity::prelude::Event::find_by_id(event.id).one(db).await?;
    assert!(db_event.is_some());

    Ok(())
}
