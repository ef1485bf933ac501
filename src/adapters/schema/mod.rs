//! Schema adapters. Implement SchemaPort.

pub mod field_schema;

pub use field_schema::{FieldKind, FieldSchema};
