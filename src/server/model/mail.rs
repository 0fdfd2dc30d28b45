//! Outbound e-mail message and its request parameters.

use lettre::message::Mailbox;
use serde_json::Value;
use std::sync::LazyLock;

use crate::server::validation::{
    constraint::{Email, IsString, MinLength},
    Field, Schema, ValidationErrors,
};

static MAIL_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            Field::required("to", "E-mail de destino é obrigatório")
                .rule(IsString::new("E-mail de destino inválido"))
                .rule(Email::new("E-mail de destino inválido")),
        )
        .field(
            Field::required("subject", "Assunto é obrigatório")
                .rule(IsString::new("Assunto deve ser um texto"))
                .rule(MinLength::new(3, "Assunto deve ter pelo menos 3 caracteres")),
        )
        .field(
            Field::required("text", "Mensagem é obrigatória")
                .rule(IsString::new("Mensagem deve ser um texto"))
                .rule(MinLength::new(10, "Mensagem deve ter pelo menos 10 caracteres")),
        )
        .field(Field::optional("html").rule(IsString::new("HTML deve ser um texto")))
});

#[derive(Debug, Clone, PartialEq)]
pub struct SendMailParams {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

impl SendMailParams {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let fields = MAIL_SCHEMA.validate(payload)?;

        Ok(Self {
            to: fields.string("to")?,
            subject: fields.string("subject")?,
            text: fields.string("text")?,
            html: fields.optional_string("html")?,
        })
    }

    /// Builds the message handed to the transport, sent from `from`.
    ///
    /// The HTML alternative falls back to the plain text body.
    pub fn into_outbound(self, from: Mailbox) -> OutboundMail {
        let html = self.html.unwrap_or_else(|| self.text.clone());

        OutboundMail {
            from,
            to: self.to,
            subject: self.subject,
            text: self.text,
            html,
        }
    }
}

/// Message accepted by a [`MailTransport`](crate::server::mail::MailTransport).
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMail {
    pub from: Mailbox,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}
