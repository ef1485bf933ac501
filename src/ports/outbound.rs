//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. All calls are synchronous and take `&self`.

use crate::domain::{Prediction, RawMessage, ValidatedMessage};
use tracing::Level;

/// Schema predicate. Decides whether a raw message has the expected shape.
pub trait SchemaPort: Send + Sync {
    fn is_valid(&self, message: &RawMessage) -> bool;
}

/// Plain predicates (`|m: &RawMessage| !m.is_empty()`) work as schemas.
impl<F> SchemaPort for F
where
    F: Fn(&RawMessage) -> bool + Send + Sync,
{
    fn is_valid(&self, message: &RawMessage) -> bool {
        self(message)
    }
}

/// Signal model. Produces a prediction for a validated message.
///
/// Infallible: a model that cannot score a message must still return a prediction.
pub trait SignalModelPort: Send + Sync {
    fn predict(&self, message: &ValidatedMessage) -> Prediction;
}

/// Leveled diagnostic sink. Nothing in the pipeline depends on what the sink does.
pub trait LogPort: Send + Sync {
    fn log(&self, level: Level, message: &str);
}
