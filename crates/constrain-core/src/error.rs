//! # Error Types
//!
//! Structured errors for tree projection and canonical rendering. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error while projecting a YAML document onto a JSON value tree.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The YAML document contains a float with no JSON representation
    /// (NaN or an infinity).
    #[error("float {0} has no JSON representation")]
    UnrepresentableFloat(f64),

    /// A YAML number that is neither an integer nor a float.
    #[error("unsupported YAML number: {0}")]
    UnsupportedNumber(String),

    /// A mapping key that is not a scalar. JSON object keys are strings;
    /// only scalar YAML keys have an unambiguous string form.
    #[error("mapping keys must be scalars, found: {0}")]
    NonScalarKey(String),
}

/// Error while rendering a JSON value tree to its canonical text form.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    /// The serializer produced bytes that are not valid UTF-8. Does not
    /// occur for `serde_json` output.
    #[error("rendered output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
