use super::*;

/// Tests listing events that have no artists or tickets.
///
/// Expected: Ok with empty line-up and ticket collections
#[tokio::test]
async fn returns_empty_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_event(db).await?;

    let result = EventRepository::new(db).get_all_with_relations().await?;

    assert_eq!(result.len(), 1);
    assert!(result[0].artists.is_empty());
    assert!(result[0].tickets.is_empty());

    Ok(())
}

/// Tests that artists and tickets are grouped under the right event.
///
/// Expected: Ok with each event carrying only its own relations
#[tokio::test]
async fn groups_relations_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let festival = factory::create_event(db).await?;
    let show = factory::create_event(db).await?;
    let headliner = factory::create_artist(db).await?;
    let opener = factory::create_artist(db).await?;

    factory::create_artist_event(db, headliner.id, festival.id).await?;
    factory::create_artist_event(db, opener.id, festival.id).await?;
    factory::create_artist_event(db, headliner.id, show.id).await?;
    factory::ticket::TicketFactory::new(db, festival.id)
        .kind("VIP")
        .price(900.0)
        .build()
        .await?;
    factory::create_ticket(db, show.id).await?;
    factory::create_ticket(db, show.id).await?;

    let result = EventRepository::new(db).get_all_with_relations().await?;

    assert_eq!(result.len(), 2);

    let festival_result = &result[0];
    assert_eq!(festival_result.event.id, festival.id);
    assert_eq!(festival_result.artists.len(), 2);
    assert_eq!(festival_result.tickets.len(), 1);
    assert_eq!(festival_result.tickets[0].price, 900.0);

    let show_result = &result[1];
    assert_eq!(show_result.event.id, show.id);
    assert_eq!(show_result.artists.len(), 1);
    assert_eq!(show_result.artists[0].id, headliner.id);
    assert_eq!(show_result.tickets.len(), 2);

    Ok(())
}

/// Tests that a stored ticket with an unknown kind surfaces as an error.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn fails_on_unknown_ticket_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    factory::ticket::TicketFactory::new(db, event.id)
        .kind("BACKSTAGE")
        .build()
        .await?;

    let result = EventRepository::new(db).get_all_with_relations().await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}
