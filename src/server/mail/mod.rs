//! Outbound e-mail delivery.
//!
//! Handlers depend on the [`MailTransport`] trait so the SMTP relay can be replaced
//! by a recording transport in tests.

pub mod smtp;

use async_trait::async_trait;

use crate::server::{error::mail::MailError, model::mail::OutboundMail};

pub use smtp::SmtpMailTransport;

#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one message.
    ///
    /// # Returns
    /// - `Ok(String)` - Message id assigned to the delivered message
    /// - `Err(MailError)` - The message could not be built or the relay rejected it
    async fn send(&self, mail: OutboundMail) -> Result<String, MailError>;
}
