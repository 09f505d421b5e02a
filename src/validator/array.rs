//! Array validator node.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ParseError, ValidationError, ValidationErrors};
use crate::node::NodeExt;
use crate::path::JsonPath;

use super::{value_type_name, BoundSchema};

/// A validator for array values.
///
/// Owns the element's schema/validator pair (`items`) when the element type
/// is known; elements are checked against it with indexed paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayValidator {
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub items: Option<Box<BoundSchema>>,
}

impl ArrayValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every constraint field from `other`, items included.
    pub fn assign(&mut self, other: &Self) {
        self.min_items = other.min_items;
        self.max_items = other.max_items;
        self.items = other.items.clone();
    }

    /// Consumes one array constraint key from a wire node.
    pub fn parse_key(&mut self, key: &str, value: &Value) -> Result<bool, ParseError> {
        match key {
            "minItems" => self.min_items = Some(value.expect_usize(key)?),
            "maxItems" => self.max_items = Some(value.expect_usize(key)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(super) fn write_fields(&self, out: &mut serde_json::Map<String, Value>) {
        if let Some(min) = self.min_items {
            out.insert("minItems".to_string(), min.into());
        }
        if let Some(max) = self.max_items {
            out.insert("maxItems".to_string(), max.into());
        }
        if let Some(ref items) = self.items {
            out.insert("items".to_string(), items.validator.to_json());
        }
    }

    /// Validates an array: size bounds plus every element against the item
    /// validator, accumulating all violations with indexed paths.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<(), ValidationErrors> {
        let Some(elements) = value.as_array() else {
            return Validation::Failure(ValidationErrors::single(
                ValidationError::new(path.clone(), "expected array")
                    .with_code("invalid_type")
                    .with_got(value_type_name(value))
                    .with_expected("array"),
            ));
        };

        let mut errors = Vec::new();
        if let Some(min) = self.min_items {
            if elements.len() < min {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("must have at least {} item(s), got {}", min, elements.len()),
                    )
                    .with_code("min_items")
                    .with_expected(format!("at least {} item(s)", min))
                    .with_got(elements.len().to_string()),
                );
            }
        }
        if let Some(max) = self.max_items {
            if elements.len() > max {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("must have at most {} item(s), got {}", max, elements.len()),
                    )
                    .with_code("max_items")
                    .with_expected(format!("at most {} item(s)", max))
                    .with_got(elements.len().to_string()),
                );
            }
        }

        if let Some(ref items) = self.items {
            for (index, element) in elements.iter().enumerate() {
                if let Validation::Failure(child) =
                    items.validator.validate(element, &path.push_index(index))
                {
                    errors.extend(child.into_vec());
                }
            }
        }

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{IntegerValidator, Validator};
    use crate::Schema;
    use crate::TypeDesc;
    use serde_json::json;

    fn integer_items() -> Box<BoundSchema> {
        let mut element = IntegerValidator::new();
        element.minimum = Some(0);
        Box::new(BoundSchema {
            schema: Schema::create(&TypeDesc::Int).unwrap(),
            validator: Validator::Integer(element),
        })
    }

    #[test]
    fn test_rejects_non_array() {
        let v = ArrayValidator::new();
        let errors = v
            .validate(&json!({}), &JsonPath::root())
            .into_result()
            .unwrap_err();
        assert_eq!(errors.first().code, "invalid_type");
    }

    #[test]
    fn test_size_bounds() {
        let mut v = ArrayValidator::new();
        v.min_items = Some(1);
        v.max_items = Some(2);

        assert!(v.validate(&json!([1]), &JsonPath::root()).is_success());
        assert!(v.validate(&json!([]), &JsonPath::root()).is_failure());
        assert!(v.validate(&json!([1, 2, 3]), &JsonPath::root()).is_failure());
    }

    #[test]
    fn test_element_errors_carry_indexed_paths() {
        let mut v = ArrayValidator::new();
        v.items = Some(integer_items());

        let errors = v
            .validate(&json!([1, -2, "x"]), &JsonPath::root())
            .into_result()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().path.to_string(), "[1]");
        assert_eq!(errors.with_code("invalid_type")[0].path.to_string(), "[2]");
    }

    #[test]
    fn test_size_and_element_violations_accumulate() {
        let mut v = ArrayValidator::new();
        v.max_items = Some(2);
        v.items = Some(integer_items());

        let errors = v
            .validate(&json!([-1, 2, 3]), &JsonPath::root())
            .into_result()
            .unwrap_err();
        assert_eq!(errors.with_code("max_items").len(), 1);
        assert_eq!(errors.with_code("min_value").len(), 1);
    }

    #[test]
    fn test_parse_key() {
        let mut v = ArrayValidator::new();
        assert!(v.parse_key("minItems", &json!(1)).unwrap());
        assert!(v.parse_key("maxItems", &json!(5)).unwrap());
        assert!(!v.parse_key("minProperties", &json!(1)).unwrap());
        assert_eq!(v.min_items, Some(1));
        assert_eq!(v.max_items, Some(5));
    }
}
