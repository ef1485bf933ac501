//! Log sink adapters. Implement LogPort.
//!
//! `TracingSink` for the binary, `MemorySink` for asserting on emitted lines.

pub mod memory_sink;
pub mod tracing_sink;

pub use memory_sink::MemorySink;
pub use tracing_sink::TracingSink;
