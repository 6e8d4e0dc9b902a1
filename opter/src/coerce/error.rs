//! Failures raised while coercing values.

use thiserror::Error;

/// A value could not be converted to its declared type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoercionError {
    /// A string value for an Object-typed option is not valid JSON.
    #[error("expected a JSON document, got {text:?}: {source}")]
    InvalidJson {
        /// The text that failed to parse.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// An Object-typed option resolved to a scalar or null.
    #[error("expected a mapping, an array or a JSON string, got {found}")]
    NotStructured {
        /// Kind of value that was found.
        found: &'static str,
    },
}
