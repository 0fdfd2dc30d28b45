use super::*;

/// Tests replacing every field of an event.
///
/// Expected: Ok with new values persisted and description cleared
#[tokio::test]
async fn replaces_event_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .description(Some("Antiga descrição".to_string()))
        .build()
        .await?;

    let updated = EventRepository::new(db)
        .update(
            created.id,
            EventParams {
                description: None,
                ..rock_in_rio()
            },
        )
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Rock in Rio");
    assert_eq!(updated.description, None);

    let db_event = entity::prelude::Event::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_event.venue, "Cidade do Rock");
    assert_eq!(db_event.description, None);

    Ok(())
}
