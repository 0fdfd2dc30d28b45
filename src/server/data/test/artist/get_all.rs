use super::*;

/// Tests listing when no artists exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_artists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArtistRepository::new(db).get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing artists in ID order.
///
/// Expected: Ok with every artist, lowest ID first
#[tokio::test]
async fn returns_artists_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::artist::ArtistFactory::new(db)
        .name("Ivete Sangalo")
        .genre("Axé")
        .build()
        .await?;
    let second = factory::create_artist(db).await?;

    let result = ArtistRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, first.id);
    assert_eq!(result[0].name, "Ivete Sangalo");
    assert_eq!(result[0].genre, "Axé");
    assert_eq!(result[1].id, second.id);

    Ok(())
}
