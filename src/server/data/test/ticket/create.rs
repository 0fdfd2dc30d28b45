use super::*;

/// Tests creating a ticket for an existing event.
///
/// Expected: Ok with ticket and its event loaded, kind stored as text
#[tokio::test]
async fn creates_ticket_with_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let result = TicketRepository::new(db)
        .create(TicketParams {
            event_id: event.id,
            kind: TicketKind::HalfPrice,
            price: 60.0,
            quantity: 500,
        })
        .await?;

    assert_eq!(result.ticket.event_id, event.id);
    assert_eq!(result.ticket.kind, TicketKind::HalfPrice);
    assert_eq!(result.ticket.quantity, 500);
    assert_eq!(result.event.id, event.id);

    let db_ticket = entity::prelude::Ticket::find_by_id(result.ticket.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_ticket.kind, "HALF-PRICE");

    Ok(())
}

/// Tests that a ticket cannot reference a missing event.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db)
        .create(TicketParams {
            event_id: 999,
            kind: TicketKind::Vip,
            price: 60.0,
            quantity: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
