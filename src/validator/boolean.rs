//! Boolean validator node. No constraints beyond the type check.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ParseError, ValidationError, ValidationErrors};
use crate::path::JsonPath;

use super::value_type_name;

/// A validator for boolean values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanValidator;

impl BooleanValidator {
    pub fn new() -> Self {
        Self
    }

    /// No constraint fields to copy; exists for dispatch uniformity.
    pub fn assign(&mut self, _other: &Self) {}

    /// Booleans have no constraint keys; every key is unrecognized.
    pub fn parse_key(&mut self, _key: &str, _value: &Value) -> Result<bool, ParseError> {
        Ok(false)
    }

    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<bool, ValidationErrors> {
        match value.as_bool() {
            Some(b) => Validation::Success(b),
            None => Validation::Failure(ValidationErrors::single(
                ValidationError::new(path.clone(), "expected boolean")
                    .with_code("invalid_type")
                    .with_got(value_type_name(value))
                    .with_expected("boolean"),
            )),
        }
    }
}
