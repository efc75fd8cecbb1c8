//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// User input does not match the expected format (e.g. a non-6-digit
    /// ATM filter). Reported back as a plain message, never retried.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Report store error: {0}")]
    Repo(String),

    /// Alert delivery failed. The intake path discards this explicitly.
    #[error("Notification failed: {0}")]
    Notify(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Transport error: {0}")]
    Transport(String),
}
