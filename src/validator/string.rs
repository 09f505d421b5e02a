//! String validator node.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ParseError, ValidationError, ValidationErrors};
use crate::node::NodeExt;
use crate::path::JsonPath;

use super::value_type_name;

/// A validator for string values.
///
/// The pattern is kept as its regex source string so validators stay plain
/// comparable data; it is compiled when a value is validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringValidator {
    pub pattern: Option<String>,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every constraint field from `other`.
    pub fn assign(&mut self, other: &Self) {
        self.pattern = other.pattern.clone();
    }

    /// Consumes one string constraint key from a wire node.
    pub fn parse_key(&mut self, key: &str, value: &Value) -> Result<bool, ParseError> {
        match key {
            "pattern" => self.pattern = Some(value.expect_str(key)?.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(super) fn write_fields(&self, out: &mut serde_json::Map<String, Value>) {
        if let Some(ref pattern) = self.pattern {
            out.insert("pattern".to_string(), pattern.as_str().into());
        }
    }

    /// Validates a value against the declared pattern.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<String, ValidationErrors> {
        let Some(s) = value.as_str() else {
            return Validation::Failure(ValidationErrors::single(
                ValidationError::new(path.clone(), "expected string")
                    .with_code("invalid_type")
                    .with_got(value_type_name(value))
                    .with_expected("string"),
            ));
        };

        if let Some(ref pattern) = self.pattern {
            let regex = match Regex::new(pattern) {
                Ok(regex) => regex,
                Err(_) => {
                    return Validation::Failure(ValidationErrors::single(
                        ValidationError::new(
                            path.clone(),
                            format!("pattern '{}' is not a valid regex", pattern),
                        )
                        .with_code("invalid_pattern"),
                    ))
                }
            };
            if !regex.is_match(s) {
                return Validation::Failure(ValidationErrors::single(
                    ValidationError::new(path.clone(), format!("must match pattern '{}'", pattern))
                        .with_code("pattern")
                        .with_expected(pattern.clone())
                        .with_got(s.to_string()),
                ));
            }
        }

        Validation::Success(s.to_string())
    }
}
