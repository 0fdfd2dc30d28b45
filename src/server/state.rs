//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool
//! and the outbound mail transport.

use lettre::message::Mailbox;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::mail::MailTransport;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and the transport sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Transport used by the mail endpoint.
    pub mailer: Arc<dyn MailTransport>,

    /// Sender of every outbound message.
    pub mail_from: Mailbox,
}

impl AppState {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn MailTransport>, mail_from: Mailbox) -> Self {
        Self {
            db,
            mailer,
            mail_from,
        }
    }
}
