use super::*;

/// Tests finding a link by its composite key.
///
/// Expected: Ok(Some) for the linked pair, Ok(None) for the reversed pair
#[tokio::test]
async fn finds_link_by_composite_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (artist, event, _) = factory::helpers::create_linked_artist_and_event(db).await?;

    let repo = ArtistEventRepository::new(db);

    let found = repo.find_by_id(artist.id, event.id).await?;
    assert!(found.is_some());
    assert!(repo.exists(artist.id, event.id).await?);

    assert!(repo.find_by_id(artist.id, event.id + 100).await?.is_none());
    assert!(!repo.exists(artist.id, event.id + 100).await?);

    Ok(())
}
