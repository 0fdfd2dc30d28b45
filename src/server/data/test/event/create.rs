use super::*;

/// Tests creating an event with every field set.
///
/// Expected: Ok with event created and timestamp preserved
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = EventRepository::new(db).create(rock_in_rio()).await?;

    assert!(event.id > 0);
    assert_eq!(event.name, "Rock in Rio");
    assert_eq!(event.venue, "Cidade do Rock");
    assert_eq!(event.base_price, 525.5);
    assert_eq!(event.description.as_deref(), Some("Primeiro fim de semana"));

    let db_event = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        db_event.starts_at,
        Utc.with_ymd_and_hms(2026, 9, 12, 20, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests creating an event without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_event_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = EventRepository::new(db)
        .create(EventParams {
            description: None,
            ..rock_in_rio()
        })
        .await?;

    let db_event = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_event.description, None);

    Ok(())
}
