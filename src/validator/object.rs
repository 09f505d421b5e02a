//! Object validator node.

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ParseError, ValidationError, ValidationErrors};
use crate::node::NodeExt;
use crate::path::JsonPath;

use super::{value_type_name, BoundSchema};

/// A validator for object values.
///
/// Owns one schema/validator pair per declared property, plus the ordered
/// required-name list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValidator {
    pub min_properties: Option<usize>,
    pub properties: IndexMap<String, BoundSchema>,
    pub required: Vec<String>,
}

impl ObjectValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every constraint field from `other`, children included.
    pub fn assign(&mut self, other: &Self) {
        self.min_properties = other.min_properties;
        self.properties = other.properties.clone();
        self.required = other.required.clone();
    }

    /// Consumes one object constraint key from a wire node.
    pub fn parse_key(&mut self, key: &str, value: &Value) -> Result<bool, ParseError> {
        match key {
            "minProperties" => self.min_properties = Some(value.expect_usize(key)?),
            "required" => {
                let names = value.as_array().ok_or_else(|| ParseError::Decode {
                    key: key.to_string(),
                    expected: "an array",
                    got: value.clone(),
                })?;
                let mut required = Vec::with_capacity(names.len());
                for name in names {
                    required.push(name.expect_str(key)?.to_string());
                }
                self.required = required;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(super) fn write_fields(&self, out: &mut serde_json::Map<String, Value>) {
        if let Some(min) = self.min_properties {
            out.insert("minProperties".to_string(), min.into());
        }
        if !self.properties.is_empty() {
            let properties: serde_json::Map<String, Value> = self
                .properties
                .iter()
                .map(|(name, bound)| (name.clone(), bound.validator.to_json()))
                .collect();
            out.insert("properties".to_string(), Value::Object(properties));
        }
        if !self.required.is_empty() {
            out.insert(
                "required".to_string(),
                Value::Array(self.required.iter().map(|n| n.as_str().into()).collect()),
            );
        }
    }

    /// Validates an object: property count, required presence, and every
    /// declared property against its child validator, accumulating all
    /// violations with keyed paths.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<(), ValidationErrors> {
        let Some(entries) = value.as_object() else {
            return Validation::Failure(ValidationErrors::single(
                ValidationError::new(path.clone(), "expected object")
                    .with_code("invalid_type")
                    .with_got(value_type_name(value))
                    .with_expected("object"),
            ));
        };

        let mut errors = Vec::new();
        if let Some(min) = self.min_properties {
            if entries.len() < min {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("must have at least {} properties, got {}", min, entries.len()),
                    )
                    .with_code("min_properties")
                    .with_expected(format!("at least {}", min))
                    .with_got(entries.len().to_string()),
                );
            }
        }

        for name in &self.required {
            if !entries.contains_key(name) {
                errors.push(
                    ValidationError::new(path.push_field(name), "required property is missing")
                        .with_code("required")
                        .with_expected(format!("property '{}'", name)),
                );
            }
        }

        for (name, bound) in &self.properties {
            if let Some(child) = entries.get(name) {
                if let Validation::Failure(failure) =
                    bound.validator.validate(child, &path.push_field(name))
                {
                    errors.extend(failure.into_vec());
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
