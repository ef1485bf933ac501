//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by drivers (stdin loop, embedding code) into the application
//! - Outbound: Called by the application into schema, model, and log adapters

pub mod inbound;
pub mod outbound;

pub use inbound::MessagePort;
pub use outbound::{LogPort, SchemaPort, SignalModelPort};
