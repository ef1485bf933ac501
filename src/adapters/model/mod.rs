//! Signal model adapters. Implement SignalModelPort.
//!
//! Only a placeholder exists; no model is loaded.

pub mod placeholder;

pub use placeholder::PlaceholderModel;
