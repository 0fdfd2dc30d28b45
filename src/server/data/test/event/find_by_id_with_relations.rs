use super::*;

/// Tests loading a single event with its line-up and tickets.
///
/// Expected: Ok(Some) with relations
#[tokio::test]
async fn finds_event_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (artist, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;
    factory::create_ticket(db, event.id).await?;

    let repo = EventRepository::new(db);
    let result = repo.find_by_id_with_relations(event.id).await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.event.name, event.name);
    assert_eq!(result.artists.len(), 1);
    assert_eq!(result.artists[0].name, artist.name);
    assert_eq!(result.tickets.len(), 1);
    assert!(repo.exists(event.id).await?);

    Ok(())
}

/// Tests loading an event that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(repo.find_by_id_with_relations(42).await?.is_none());
    assert!(!repo.exists(42).await?);

    Ok(())
}
