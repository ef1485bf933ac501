//! Inbound port. Drivers call into the application.

use crate::domain::{DomainError, EnrichedMessage, RawMessage};

/// Input port: validate a raw message and enrich it with a signal.
pub trait MessagePort: Send + Sync {
    /// Run the full pipeline for one message. Fails only with `DomainError::InvalidFormat`.
    fn process(&self, message: RawMessage) -> Result<EnrichedMessage, DomainError>;
}
