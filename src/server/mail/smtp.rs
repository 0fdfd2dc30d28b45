use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use crate::server::{
    config::MailConfig, error::mail::MailError, mail::MailTransport, model::mail::OutboundMail,
};

/// SMTP relay transport built on lettre's async Tokio transport.
#[derive(Clone)]
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Builds the transport from configuration without opening a connection.
    ///
    /// Uses implicit TLS when `secure` is set and opportunistic STARTTLS otherwise.
    /// Server certificates are not verified.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let tls_parameters = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(true)
            .build_rustls()?;
        let tls = if config.secure {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Opportunistic(tls_parameters)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .tls(tls)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport })
    }

    /// Opens a connection to the relay and reports whether it accepted it.
    pub async fn test_connection(&self) -> Result<bool, MailError> {
        Ok(self.transport.test_connection().await?)
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, mail: OutboundMail) -> Result<String, MailError> {
        let message_id = message_id(&mail.from);
        let to: Mailbox = mail.to.parse()?;

        let message = Message::builder()
            .from(mail.from)
            .to(to)
            .subject(mail.subject)
            .message_id(Some(message_id.clone()))
            .multipart(MultiPart::alternative_plain_html(mail.text, mail.html))?;

        let response = self.transport.send(message).await?;
        tracing::debug!(
            "SMTP relay accepted {} with code {}",
            message_id,
            response.code()
        );

        Ok(message_id)
    }
}

/// Generates a `Message-ID` value under the sender's domain.
fn message_id(from: &Mailbox) -> String {
    format!("<{}@{}>", Uuid::new_v4(), from.email.domain())
}
