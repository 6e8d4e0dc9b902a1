//! Error types for the demo binary.

use std::io;

use thiserror::Error;

/// Result alias used throughout the demo.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Resolution of the layered configuration failed.
    #[error("failed to resolve configuration: {0}")]
    Configuration(#[from] opter::OpterError),
    /// The report could not be serialised.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
