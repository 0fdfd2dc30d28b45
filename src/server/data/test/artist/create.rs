use super::*;

/// Tests creating an artist.
///
/// Verifies that the repository inserts the artist and returns it with a
/// generated ID.
///
/// Expected: Ok with artist created
#[tokio::test]
async fn creates_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let artist = repo
        .create(ArtistParams {
            name: "Anitta".to_string(),
            genre: "Pop".to_string(),
        })
        .await?;

    assert!(artist.id > 0);
    assert_eq!(artist.name, "Anitta");
    assert_eq!(artist.genre, "Pop");

    let db_artist = entity::prelude::Artist::find_by_id(artist.id).one(db).await?;
    assert!(db_artist.is_some());
    assert_eq!(db_artist.unwrap().name, "Anitta");

    Ok(())
}

/// Tests that consecutive inserts receive distinct IDs.
///
/// Expected: Ok with increasing IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let first = repo
        .create(ArtistParams {
            name: "Gilberto Gil".to_string(),
            genre: "MPB".to_string(),
        })
        .await?;
    let second = repo
        .create(ArtistParams {
            name: "Caetano Veloso".to_string(),
            genre: "MPB".to_string(),
        })
        .await?;

    assert!(second.id > first.id);

    Ok(())
}
