use super::*;

/// Tests removing a link while keeping the artist and the event.
///
/// Expected: Ok with only the link removed
#[tokio::test]
async fn deletes_only_the_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (artist, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;

    ArtistEventRepository::new(db)
        .delete(artist.id, event.id)
        .await?;

    assert!(
        entity::prelude::ArtistEvent::find_by_id((artist.id, event.id))
            .one(db)
            .await?
            .is_none()
    );
    assert!(entity::prelude::Artist::find_by_id(artist.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
