use super::*;

/// Tests that deleting an event removes its tickets and artist links.
///
/// Expected: Ok with event, tickets and links removed and artist intact
#[tokio::test]
async fn deletes_event_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (artist, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;
    let ticket = factory::create_ticket(db, event.id).await?;

    EventRepository::new(db).delete(event.id).await?;

    assert!(entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Ticket::find_by_id(ticket.id)
        .one(db)
        .await?
        .is_none());
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

    Ok(())
}
