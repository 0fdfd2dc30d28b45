use super::*;

/// Tests finding an existing artist.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let result = repo.find_by_id(created.id).await?;

    assert!(result.is_some());
    let artist = result.unwrap();
    assert_eq!(artist.name, created.name);
    assert_eq!(artist.genre, created.genre);
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests finding an artist that does not exist.
///
/// Expected: Ok(None) and `exists` returns false
#[tokio::test]
async fn returns_none_for_missing_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
