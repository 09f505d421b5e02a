//! The modeled JSON value categories.
//!
//! This module provides [`ValueKind`], the closed set of JSON value kinds a
//! schema or validator node can describe. Wire names follow JSON Schema
//! (`"integer"`, `"number"`, ...).

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::SchemaError;

/// One of the six JSON value kinds modeled by schemas and validators.
///
/// Enum types are not a kind of their own: their variants travel as string
/// literals, so the type mapper resolves them to [`ValueKind::String`] and
/// schema construction expresses them as `anyOf` variant properties instead
/// of a scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Number,
    String,
    Boolean,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the JSON Schema wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = SchemaError;

    /// Parses a wire name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "integer" => Ok(ValueKind::Integer),
            "number" => Ok(ValueKind::Number),
            "string" => Ok(ValueKind::String),
            "boolean" => Ok(ValueKind::Boolean),
            "array" => Ok(ValueKind::Array),
            "object" => Ok(ValueKind::Object),
            _ => Err(SchemaError::UnsupportedType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for kind in [
            ValueKind::Integer,
            ValueKind::Number,
            ValueKind::String,
            ValueKind::Boolean,
            ValueKind::Array,
            ValueKind::Object,
        ] {
            assert_eq!(kind.as_str().parse::<ValueKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Integer".parse::<ValueKind>().unwrap(), ValueKind::Integer);
        assert_eq!("OBJECT".parse::<ValueKind>().unwrap(), ValueKind::Object);
    }

    #[test]
    fn test_from_str_rejects_unknown_name() {
        let err = "tuple".parse::<ValueKind>().unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedType(name) if name == "tuple"));
    }
}
