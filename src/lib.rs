//! ml-signal: schema validation and placeholder ML signal enrichment, hexagonal layout.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
