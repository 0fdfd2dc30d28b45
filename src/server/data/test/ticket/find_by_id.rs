use super::*;

/// Tests finding an existing ticket and a missing one.
///
/// Expected: Ok(Some) for the existing ID, Ok(None) otherwise
#[tokio::test]
async fn finds_ticket_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let ticket = factory::create_ticket(db, event.id).await?;

    let repo = TicketRepository::new(db);

    let found = repo.find_by_id(ticket.id).await?.unwrap();
    assert_eq!(found.ticket.kind, TicketKind::Common);
    assert_eq!(found.ticket.price, 150.0);
    assert_eq!(found.event.name, event.name);
    assert!(repo.exists(ticket.id).await?);

    assert!(repo.find_by_id(ticket.id + 1).await?.is_none());
    assert!(!repo.exists(ticket.id + 1).await?);

    Ok(())
}
