//! Application use cases. Orchestrate domain logic via ports.

pub mod signal_service;

pub use signal_service::SignalService;
