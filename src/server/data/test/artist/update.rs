use super::*;

/// Tests replacing the fields of an existing artist.
///
/// Expected: Ok with updated artist persisted
#[tokio::test]
async fn updates_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let updated = repo
        .update(
            created.id,
            ArtistParams {
                name: "Ludmilla".to_string(),
                genre: "Funk".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ludmilla");
    assert_eq!(updated.genre, "Funk");

    let db_artist = entity::prelude::Artist::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_artist.genre, "Funk");

    Ok(())
}

/// Tests updating an artist that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArtistRepository::new(db)
        .update(
            999,
            ArtistParams {
                name: "Ludmilla".to_string(),
                genre: "Funk".to_string(),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
