use thiserror::Error;

/// Failures while building or delivering an outbound e-mail.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid e-mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled.
    #[error("Failed to build e-mail: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP server rejected the message or could not be reached.
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
}
