use super::*;

/// Tests listing links ordered by event then artist.
///
/// Expected: Ok with every link and both sides loaded
#[tokio::test]
async fn returns_links_with_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_event = factory::create_event(db).await?;
    let second_event = factory::create_event(db).await?;
    let artist = factory::create_artist(db).await?;

    factory::create_artist_event(db, artist.id, second_event.id).await?;
    factory::create_artist_event(db, artist.id, first_event.id).await?;

    let result = ArtistEventRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].event.id, first_event.id);
    assert_eq!(result[1].event.id, second_event.id);
    assert!(result.iter().all(|link| link.artist.id == artist.id));

    Ok(())
}

/// Tests listing when nothing is linked.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_artist(db).await?;
    factory::create_event(db).await?;

    let result = ArtistEventRepository::new(db).get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing a link whose event row is gone.
///
/// Expected: Err(RecordNotFound) instead of silently skipping the link
#[tokio::test]
async fn fails_on_link_to_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    entity::prelude::Event::delete_by_id(event.id).exec(db).await?;

    let result = ArtistEventRepository::new(db).get_all().await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
