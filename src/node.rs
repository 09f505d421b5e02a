//! Typed extraction from parsed JSON nodes.
//!
//! The parser and the per-validator `parse_key` implementations read wire
//! fields through this trait rather than matching on [`Value`] directly, so
//! every kind disagreement surfaces as a [`ParseError::Decode`] carrying the
//! key and the offending raw value.

use serde_json::Value;

use crate::error::ParseError;

/// Typed extraction over a parsed JSON node.
///
/// Each method fails when the node's runtime kind disagrees with the
/// requested extraction.
pub trait NodeExt {
    fn expect_str(&self, key: &str) -> Result<&str, ParseError>;
    fn expect_i64(&self, key: &str) -> Result<i64, ParseError>;
    fn expect_f64(&self, key: &str) -> Result<f64, ParseError>;
    fn expect_bool(&self, key: &str) -> Result<bool, ParseError>;
    fn expect_usize(&self, key: &str) -> Result<usize, ParseError>;
}

fn decode_error(key: &str, expected: &'static str, got: &Value) -> ParseError {
    ParseError::Decode {
        key: key.to_string(),
        expected,
        got: got.clone(),
    }
}

impl NodeExt for Value {
    fn expect_str(&self, key: &str) -> Result<&str, ParseError> {
        self.as_str().ok_or_else(|| decode_error(key, "a string", self))
    }

    fn expect_i64(&self, key: &str) -> Result<i64, ParseError> {
        self.as_i64()
            .ok_or_else(|| decode_error(key, "an integer", self))
    }

    fn expect_f64(&self, key: &str) -> Result<f64, ParseError> {
        self.as_f64()
            .ok_or_else(|| decode_error(key, "a number", self))
    }

    fn expect_bool(&self, key: &str) -> Result<bool, ParseError> {
        self.as_bool()
            .ok_or_else(|| decode_error(key, "a boolean", self))
    }

    fn expect_usize(&self, key: &str) -> Result<usize, ParseError> {
        self.as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| decode_error(key, "a non-negative integer", self))
    }
}
