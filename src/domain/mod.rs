//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    EnrichedMessage, ML_CONFIDENCE_KEY, ML_SIGNAL_KEY, Prediction, RawMessage, Signal,
    ValidatedMessage,
};
pub use errors::DomainError;
