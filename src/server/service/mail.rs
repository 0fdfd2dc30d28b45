use lettre::message::Mailbox;
use serde_json::Value;

use crate::server::{error::AppError, mail::MailTransport, model::mail::SendMailParams};

pub struct MailService<'a> {
    transport: &'a dyn MailTransport,
    from: &'a Mailbox,
}

impl<'a> MailService<'a> {
    pub fn new(transport: &'a dyn MailTransport, from: &'a Mailbox) -> Self {
        Self { transport, from }
    }

    /// Validates the payload and hands the message to the transport
    ///
    /// The transport is not invoked when validation fails.
    ///
    /// # Returns
    /// - `Ok(String)` - Message id of the delivered message
    /// - `Err(AppError::Validation)` - The payload failed validation
    /// - `Err(AppError::MailErr)` - The transport could not deliver the message
    pub async fn send(&self, payload: &Value) -> Result<String, AppError> {
        let params = SendMailParams::from_payload(payload)?;
        let mail = params.into_outbound(self.from.clone());

        tracing::debug!("Sending e-mail to {}", mail.to);
        let message_id = self.transport.send(mail).await?;
        tracing::info!("E-mail sent with id {}", message_id);

        Ok(message_id)
    }
}
