//! Ticket factory for creating test ticket entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets for an existing event.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = TicketFactory::new(&db, event.id).kind("VIP").price(500.0).build().await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    kind: String,
    price: f64,
    quantity: i32,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"COMMON"`
    /// - price: `150.0`
    /// - quantity: `100`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event the ticket belongs to
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        Self {
            db,
            event_id,
            kind: "COMMON".to_string(),
            price: 150.0,
            quantity: 100,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            kind: ActiveValue::Set(self.kind),
            price: ActiveValue::Set(self.price),
            quantity: ActiveValue::Set(self.quantity),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `COMMON` ticket with default values for the specified event.
pub async fn create_ticket(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, event_id).build().await
}
