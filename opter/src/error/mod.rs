//! Error types produced while resolving an option map.

mod helpers;
mod types;

pub use types::{OpterError, OpterResult};
