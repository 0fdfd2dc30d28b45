use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /mail/send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SendMailDto {
    pub to: String,
    pub subject: String,
    pub text: String,
    /// Falls back to `text` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MailSentDto {
    pub message: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
}
