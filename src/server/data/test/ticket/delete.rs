use super::*;

/// Tests deleting a ticket keeps its event.
///
/// Expected: Ok with ticket removed
#[tokio::test]
async fn deletes_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let ticket = factory::create_ticket(db, event.id).await?;

    let repo = TicketRepository::new(db);
    repo.delete(ticket.id).await?;

    assert!(!repo.exists(ticket.id).await?);
    assert!(entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
