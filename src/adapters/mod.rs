//! Infrastructure adapters. Implement ports.
//!
//! Schema rules, the placeholder model, log sinks, and the stdin driver.

pub mod io;
pub mod logging;
pub mod model;
pub mod schema;
