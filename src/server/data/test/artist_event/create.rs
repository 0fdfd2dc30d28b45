use super::*;

/// Tests linking an existing artist to an existing event.
///
/// Expected: Ok with both sides loaded
#[tokio::test]
async fn creates_link_with_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;
    let event = factory::create_event(db).await?;

    let link = ArtistEventRepository::new(db)
        .create(ArtistEventParams {
            artist_id: artist.id,
            event_id: event.id,
        })
        .await?;

    assert_eq!(link.artist.id, artist.id);
    assert_eq!(link.artist.name, artist.name);
    assert_eq!(link.event.id, event.id);
    assert_eq!(link.event.name, event.name);

    Ok(())
}

/// Tests that linking the same pair twice is rejected by the composite key.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (artist, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;

    let result = ArtistEventRepository::new(db)
        .create(ArtistEventParams {
            artist_id: artist.id,
            event_id: event.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
