use super::*;

/// Tests moving a ticket to another event while changing its fields.
///
/// Expected: Ok with the new event loaded
#[tokio::test]
async fn updates_ticket_and_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_event(db).await?;
    let target = factory::create_event(db).await?;
    let ticket = factory::create_ticket(db, original.id).await?;

    let result = TicketRepository::new(db)
        .update(
            ticket.id,
            TicketParams {
                event_id: target.id,
                kind: TicketKind::Vip,
                price: 800.0,
                quantity: 20,
            },
        )
        .await?;

    assert_eq!(result.ticket.id, ticket.id);
    assert_eq!(result.ticket.kind, TicketKind::Vip);
    assert_eq!(result.ticket.price, 800.0);
    assert_eq!(result.ticket.quantity, 20);
    assert_eq!(result.event.id, target.id);

    Ok(())
}
