//! Fatal error taxonomy.
//!
//! Everything here is a fail-fast condition: either the input is malformed
//! or a caller broke a contract. There are no recoverable variants.

use serde_json::Value;

use crate::kind::ValueKind;

/// A fatal schema construction or assignment failure.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A type (or member type) has no JSON kind mapping.
    #[error("no JSON kind mapping for type '{0}'")]
    UnsupportedType(String),

    /// An `assign` call crossed validator variants. Programmer error.
    #[error("cannot assign a {found} validator's state onto a {expected} validator")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    /// Wire bytes did not describe a well-formed schema.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A failure while decoding schema bytes into the in-memory model.
///
/// Variants carry the offending raw value so diagnostics can show what was
/// actually present on the wire.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The root node of a schema document must be an object.
    #[error("schema root must be an object, got: {got}")]
    RootNotObject { got: Value },

    /// A field extraction disagreed with the node's actual kind.
    #[error("'{key}' must be {expected}, got: {got}")]
    Decode {
        key: String,
        expected: &'static str,
        got: Value,
    },

    /// The input bytes were not valid UTF-8.
    #[error("schema bytes are not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    /// The input text was not valid JSON.
    #[error("schema bytes are not valid JSON")]
    Json(#[from] serde_json::Error),
}
