//! Integer and number validator nodes.
//!
//! Both carry the numeric constraint set of the modeled JSON Schema subset:
//! `minimum`/`maximum` with exclusivity flags and `multipleOf`. The integer
//! node works over `i64`, the number node over `f64`.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ParseError, ValidationError, ValidationErrors};
use crate::node::NodeExt;
use crate::path::JsonPath;

use super::value_type_name;

/// A validator for integer values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerValidator {
    pub multiple_of: Option<i64>,
    pub maximum: Option<i64>,
    /// Meaningful only when `maximum` is set.
    pub exclusive_maximum: bool,
    pub minimum: Option<i64>,
    /// Meaningful only when `minimum` is set.
    pub exclusive_minimum: bool,
}

impl IntegerValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every constraint field from `other`.
    pub fn assign(&mut self, other: &Self) {
        self.multiple_of = other.multiple_of;
        self.maximum = other.maximum;
        self.exclusive_maximum = other.exclusive_maximum;
        self.minimum = other.minimum;
        self.exclusive_minimum = other.exclusive_minimum;
    }

    /// Consumes one numeric constraint key from a wire node.
    pub fn parse_key(&mut self, key: &str, value: &Value) -> Result<bool, ParseError> {
        match key {
            "multipleOf" => self.multiple_of = Some(value.expect_i64(key)?),
            "maximum" => self.maximum = Some(value.expect_i64(key)?),
            "exclusiveMaximum" => self.exclusive_maximum = value.expect_bool(key)?,
            "minimum" => self.minimum = Some(value.expect_i64(key)?),
            "exclusiveMinimum" => self.exclusive_minimum = value.expect_bool(key)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(super) fn write_fields(&self, out: &mut serde_json::Map<String, Value>) {
        if let Some(m) = self.multiple_of {
            out.insert("multipleOf".to_string(), m.into());
        }
        if let Some(max) = self.maximum {
            out.insert("maximum".to_string(), max.into());
            if self.exclusive_maximum {
                out.insert("exclusiveMaximum".to_string(), true.into());
            }
        }
        if let Some(min) = self.minimum {
            out.insert("minimum".to_string(), min.into());
            if self.exclusive_minimum {
                out.insert("exclusiveMinimum".to_string(), true.into());
            }
        }
    }

    /// Validates a value, accumulating every constraint violation.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<i64, ValidationErrors> {
        let n = match value.as_i64() {
            Some(n) => n,
            None => {
                return Validation::Failure(ValidationErrors::single(
                    ValidationError::new(path.clone(), "expected integer")
                        .with_code("invalid_type")
                        .with_got(value_type_name(value))
                        .with_expected("integer"),
                ))
            }
        };

        let mut errors = Vec::new();
        if let Some(min) = self.minimum {
            let violated = if self.exclusive_minimum { n <= min } else { n < min };
            if violated {
                let cmp = if self.exclusive_minimum { "more than" } else { "at least" };
                errors.push(
                    ValidationError::new(path.clone(), format!("must be {} {}, got {}", cmp, min, n))
                        .with_code("min_value")
                        .with_expected(format!("{} {}", cmp, min))
                        .with_got(n.to_string()),
                );
            }
        }
        if let Some(max) = self.maximum {
            let violated = if self.exclusive_maximum { n >= max } else { n > max };
            if violated {
                let cmp = if self.exclusive_maximum { "less than" } else { "at most" };
                errors.push(
                    ValidationError::new(path.clone(), format!("must be {} {}, got {}", cmp, max, n))
                        .with_code("max_value")
                        .with_expected(format!("{} {}", cmp, max))
                        .with_got(n.to_string()),
                );
            }
        }
        if let Some(m) = self.multiple_of {
            if m != 0 && n % m != 0 {
                errors.push(
                    ValidationError::new(path.clone(), format!("must be a multiple of {}, got {}", m, n))
                        .with_code("multiple_of")
                        .with_expected(format!("multiple of {}", m))
                        .with_got(n.to_string()),
                );
            }
        }

        if errors.is_empty() {
            Validation::Success(n)
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

/// A validator for floating-point number values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    pub multiple_of: Option<f64>,
    pub maximum: Option<f64>,
    /// Meaningful only when `maximum` is set.
    pub exclusive_maximum: bool,
    pub minimum: Option<f64>,
    /// Meaningful only when `minimum` is set.
    pub exclusive_minimum: bool,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every constraint field from `other`.
    pub fn assign(&mut self, other: &Self) {
        self.multiple_of = other.multiple_of;
        self.maximum = other.maximum;
        self.exclusive_maximum = other.exclusive_maximum;
        self.minimum = other.minimum;
        self.exclusive_minimum = other.exclusive_minimum;
    }

    /// Consumes one numeric constraint key from a wire node.
    pub fn parse_key(&mut self, key: &str, value: &Value) -> Result<bool, ParseError> {
        match key {
            "multipleOf" => self.multiple_of = Some(value.expect_f64(key)?),
            "maximum" => self.maximum = Some(value.expect_f64(key)?),
            "exclusiveMaximum" => self.exclusive_maximum = value.expect_bool(key)?,
            "minimum" => self.minimum = Some(value.expect_f64(key)?),
            "exclusiveMinimum" => self.exclusive_minimum = value.expect_bool(key)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(super) fn write_fields(&self, out: &mut serde_json::Map<String, Value>) {
        if let Some(m) = self.multiple_of {
            out.insert("multipleOf".to_string(), m.into());
        }
        if let Some(max) = self.maximum {
            out.insert("maximum".to_string(), max.into());
            if self.exclusive_maximum {
                out.insert("exclusiveMaximum".to_string(), true.into());
            }
        }
        if let Some(min) = self.minimum {
            out.insert("minimum".to_string(), min.into());
            if self.exclusive_minimum {
                out.insert("exclusiveMinimum".to_string(), true.into());
            }
        }
    }

    /// Validates a value, accumulating every constraint violation.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<f64, ValidationErrors> {
        let n = match value.as_f64() {
            Some(n) => n,
            None => {
                return Validation::Failure(ValidationErrors::single(
                    ValidationError::new(path.clone(), "expected number")
                        .with_code("invalid_type")
                        .with_got(value_type_name(value))
                        .with_expected("number"),
                ))
            }
        };

        let mut errors = Vec::new();
        if let Some(min) = self.minimum {
            let violated = if self.exclusive_minimum { n <= min } else { n < min };
            if violated {
                let cmp = if self.exclusive_minimum { "more than" } else { "at least" };
                errors.push(
                    ValidationError::new(path.clone(), format!("must be {} {}, got {}", cmp, min, n))
                        .with_code("min_value")
                        .with_expected(format!("{} {}", cmp, min))
                        .with_got(n.to_string()),
                );
            }
        }
        if let Some(max) = self.maximum {
            let violated = if self.exclusive_maximum { n >= max } else { n > max };
            if violated {
                let cmp = if self.exclusive_maximum { "less than" } else { "at most" };
                errors.push(
                    ValidationError::new(path.clone(), format!("must be {} {}, got {}", cmp, max, n))
                        .with_code("max_value")
                        .with_expected(format!("{} {}", cmp, max))
                        .with_got(n.to_string()),
                );
            }
        }
        if let Some(m) = self.multiple_of {
            if m != 0.0 && (n / m).fract() != 0.0 {
                errors.push(
                    ValidationError::new(path.clone(), format!("must be a multiple of {}, got {}", m, n))
                        .with_code("multiple_of")
                        .with_expected(format!("multiple of {}", m))
                        .with_got(n.to_string()),
                );
            }
        }

        if errors.is_empty() {
            Validation::Success(n)
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}
