//! Placeholder model. Returns a fixed prediction for every message.

use crate::domain::{Prediction, Signal, ValidatedMessage};
use crate::ports::SignalModelPort;

pub const PLACEHOLDER_SIGNAL: Signal = Signal::Buy;
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.76;

/// Stand-in for a real model. Ignores the message contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderModel;

impl PlaceholderModel {
    pub fn new() -> Self {
        Self
    }
}

impl SignalModelPort for PlaceholderModel {
    fn predict(&self, _message: &ValidatedMessage) -> Prediction {
        Prediction {
            signal: PLACEHOLDER_SIGNAL,
            confidence: PLACEHOLDER_CONFIDENCE,
        }
    }
}
