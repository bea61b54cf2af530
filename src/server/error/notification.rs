use thiserror::Error;

/// Failures in the email notification path.
///
/// These never surface to the HTTP caller: transport setup failures abort
/// startup, and send-time failures are logged and swallowed by the
/// notification service.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// A configured mail address could not be parsed.
    #[error("Invalid mail address '{0}'")]
    InvalidAddress(String),

    /// Failed to build the email message.
    #[error(transparent)]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure.
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
}
