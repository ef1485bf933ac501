//! Signal service. Validates inbound messages and enriches them with a model signal.
//!
//! Synchronous and stateless: every call is independent, so one instance can be shared via `Arc`.

use crate::domain::{DomainError, EnrichedMessage, RawMessage, ValidatedMessage};
use crate::ports::{LogPort, MessagePort, SchemaPort, SignalModelPort};
use std::sync::Arc;
use tracing::Level;

/// Symbol reported in logs when the message has none.
const UNKNOWN_SYMBOL: &str = "UNKNOWN";

/// Service for message validation and signal generation.
///
/// Flow:
/// 1. Check the raw message against the schema port
/// 2. Ask the model port for a prediction
/// 3. Merge the prediction into the message (prediction keys win)
pub struct SignalService {
    schema: Arc<dyn SchemaPort>,
    model: Arc<dyn SignalModelPort>,
    log: Arc<dyn LogPort>,
}

impl SignalService {
    /// Create a new signal service.
    ///
    /// # Arguments
    /// * `schema` - Schema predicate (FieldSchema, closure, etc.)
    /// * `model` - Signal model (PlaceholderModel until a real one exists)
    /// * `log` - Diagnostic sink
    pub fn new(
        schema: Arc<dyn SchemaPort>,
        model: Arc<dyn SignalModelPort>,
        log: Arc<dyn LogPort>,
    ) -> Self {
        Self { schema, model, log }
    }

    /// Validate the raw message against the schema.
    ///
    /// Returns the same fields typed as [`ValidatedMessage`]; nothing is copied or changed.
    ///
    /// # Errors
    /// `DomainError::InvalidFormat` carrying the rejected message.
    pub fn validate_input_message(
        &self,
        message: RawMessage,
    ) -> Result<ValidatedMessage, DomainError> {
        self.log.log(Level::DEBUG, "validating message schema");
        if !self.schema.is_valid(&message) {
            self.log
                .log(Level::ERROR, &format!("invalid message schema: {}", message));
            return Err(DomainError::InvalidFormat { message });
        }
        Ok(ValidatedMessage::from_raw(message))
    }

    /// Enrich a validated message with `ml_signal` and `ml_confidence`.
    ///
    /// `symbol` is read for logging only (`UNKNOWN` when missing); the output keeps whatever the input had.
    pub fn generate_ml_signal(&self, message: ValidatedMessage) -> EnrichedMessage {
        let symbol = message
            .symbol()
            .map(|s| s.into_owned())
            .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string());
        self.log
            .log(Level::INFO, &format!("generating ML signal for {}", symbol));

        let prediction = self.model.predict(&message);
        self.log.log(
            Level::DEBUG,
            &format!(
                "ML result for {}: signal={} confidence={}",
                symbol, prediction.signal, prediction.confidence
            ),
        );

        EnrichedMessage::new(message, prediction)
    }
}

impl MessagePort for SignalService {
    fn process(&self, message: RawMessage) -> Result<EnrichedMessage, DomainError> {
        let validated = self.validate_input_message(message)?;
        Ok(self.generate_ml_signal(validated))
    }
}
