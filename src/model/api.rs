use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload: a single message, or one message per violated validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: ErrorMessage,
}

impl ErrorDto {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage::Single(message.into()),
        }
    }

    pub fn messages(messages: Vec<String>) -> Self {
        Self {
            error: ErrorMessage::List(messages),
        }
    }
}
