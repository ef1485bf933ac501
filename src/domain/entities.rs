//! Domain entities. Pure data structures for the core business.
//!
//! Raw and validated messages share a representation; only the validator turns one into the other.

use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// Output key holding the categorical signal.
pub const ML_SIGNAL_KEY: &str = "ml_signal";

/// Output key holding the confidence score.
pub const ML_CONFIDENCE_KEY: &str = "ml_confidence";

/// Message as received from upstream. No schema enforced at this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawMessage(Map<String, Value>);

impl RawMessage {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawMessage {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Only JSON objects are messages; any other value is handed back as the error.
impl TryFrom<Value> for RawMessage {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

impl fmt::Display for RawMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// A message that has passed schema validation.
///
/// Same fields as the [`RawMessage`] it came from, moved rather than copied.
/// Constructed only by the validator in [`crate::usecases::SignalService`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedMessage(Map<String, Value>);

impl ValidatedMessage {
    pub(crate) fn from_raw(raw: RawMessage) -> Self {
        Self(raw.0)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `symbol` field for display: strings as-is, other values as compact JSON.
    pub fn symbol(&self) -> Option<Cow<'_, str>> {
        self.0.get("symbol").map(|value| match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Categorical trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model output: a signal and its confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub signal: Signal,
    pub confidence: f64,
}

/// Validated message with the prediction merged in. Prediction keys win over input keys.
///
/// Input key order is kept; new keys are appended, overwritten keys stay in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnrichedMessage(Map<String, Value>);

impl EnrichedMessage {
    pub fn new(message: ValidatedMessage, prediction: Prediction) -> Self {
        let mut fields = message.into_inner();
        fields.insert(
            ML_SIGNAL_KEY.to_string(),
            Value::String(prediction.signal.as_str().to_string()),
        );
        fields.insert(ML_CONFIDENCE_KEY.to_string(), Value::from(prediction.confidence));
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn signal(&self) -> Option<&str> {
        self.0.get(ML_SIGNAL_KEY).and_then(Value::as_str)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.0.get(ML_CONFIDENCE_KEY).and_then(Value::as_f64)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<EnrichedMessage> for Value {
    fn from(message: EnrichedMessage) -> Self {
        Value::Object(message.0)
    }
}

impl fmt::Display for EnrichedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
