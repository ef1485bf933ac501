//! Driver adapters. Feed messages into MessagePort from byte streams.

pub mod jsonl;

pub use jsonl::{JsonLinesDriver, RunSummary};
