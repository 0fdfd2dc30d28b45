use super::*;

/// Tests listing tickets with their events.
///
/// Expected: Ok with every ticket ordered by ID
#[tokio::test]
async fn returns_tickets_with_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_event = factory::create_event(db).await?;
    let second_event = factory::create_event(db).await?;
    let vip = factory::ticket::TicketFactory::new(db, second_event.id)
        .kind("VIP")
        .build()
        .await?;
    let common = factory::create_ticket(db, first_event.id).await?;

    let result = TicketRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].ticket.id, vip.id);
    assert_eq!(result[0].ticket.kind, TicketKind::Vip);
    assert_eq!(result[0].event.id, second_event.id);
    assert_eq!(result[1].ticket.id, common.id);
    assert_eq!(result[1].event.id, first_event.id);

    Ok(())
}
