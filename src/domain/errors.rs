//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::RawMessage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Schema predicate rejected the message. Carries the offending message for diagnostics.
    #[error("Invalid message format: {message}")]
    InvalidFormat { message: RawMessage },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
