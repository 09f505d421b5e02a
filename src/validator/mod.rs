//! The runtime validator tree.
//!
//! A [`Validator`] is the executable counterpart of a [`Schema`] node: one
//! variant per JSON value kind, each carrying only its own constraint fields.
//! Composite variants own their children ([`ArrayValidator`] its item pair,
//! [`ObjectValidator`] its property map), mirroring the schema's nesting.

mod array;
mod boolean;
mod factory;
mod numeric;
mod object;
mod string;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use factory::compile;
pub use numeric::{IntegerValidator, NumberValidator};
pub use object::ObjectValidator;
pub use string::StringValidator;

use std::hash::{Hash, Hasher};

use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{ParseError, SchemaError, ValidationErrors};
use crate::kind::ValueKind;
use crate::path::JsonPath;
use crate::schema::Schema;

/// A schema description paired with the validator built for it.
///
/// The factory produces these for array items and object properties, so each
/// composite validator carries both the displayable description and the
/// executable checker of its children.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundSchema {
    pub schema: Schema,
    pub validator: Validator,
}

/// A validator node, tagged by the JSON value kind it checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    Integer(IntegerValidator),
    Number(NumberValidator),
    String(StringValidator),
    Boolean(BooleanValidator),
    Array(ArrayValidator),
    Object(ObjectValidator),
}

impl Validator {
    /// The value kind this node checks; fixed per variant.
    pub fn kind(&self) -> ValueKind {
        match self {
            Validator::Integer(_) => ValueKind::Integer,
            Validator::Number(_) => ValueKind::Number,
            Validator::String(_) => ValueKind::String,
            Validator::Boolean(_) => ValueKind::Boolean,
            Validator::Array(_) => ValueKind::Array,
            Validator::Object(_) => ValueKind::Object,
        }
    }

    /// Overwrites this node's constraint fields from `other`.
    ///
    /// The single mutation path on an otherwise read-only tree; it exists so
    /// a validator can be patched in place when merging a base schema with an
    /// override. Fails when `other` is a different variant. Idempotent.
    pub fn assign(&mut self, other: &Validator) -> Result<(), SchemaError> {
        match (self, other) {
            (Validator::Integer(lhs), Validator::Integer(rhs)) => lhs.assign(rhs),
            (Validator::Number(lhs), Validator::Number(rhs)) => lhs.assign(rhs),
            (Validator::String(lhs), Validator::String(rhs)) => lhs.assign(rhs),
            (Validator::Boolean(lhs), Validator::Boolean(rhs)) => lhs.assign(rhs),
            (Validator::Array(lhs), Validator::Array(rhs)) => lhs.assign(rhs),
            (Validator::Object(lhs), Validator::Object(rhs)) => lhs.assign(rhs),
            (lhs, rhs) => {
                return Err(SchemaError::TypeMismatch {
                    expected: lhs.kind(),
                    found: rhs.kind(),
                })
            }
        }
        Ok(())
    }

    /// Returns a copy of this node patched with `other`'s constraints,
    /// leaving the receiver untouched.
    pub fn merged(&self, other: &Validator) -> Result<Validator, SchemaError> {
        let mut merged = self.clone();
        merged.assign(other)?;
        Ok(merged)
    }

    /// Consumes one wire constraint key for this node.
    ///
    /// Returns `Ok(true)` when the key was recognized and applied,
    /// `Ok(false)` when the key is not a constraint of this variant, and a
    /// decode error when the node kind disagrees with the key's value.
    pub fn parse_key(&mut self, key: &str, value: &Value) -> Result<bool, ParseError> {
        match self {
            Validator::Integer(v) => v.parse_key(key, value),
            Validator::Number(v) => v.parse_key(key, value),
            Validator::String(v) => v.parse_key(key, value),
            Validator::Boolean(v) => v.parse_key(key, value),
            Validator::Array(v) => v.parse_key(key, value),
            Validator::Object(v) => v.parse_key(key, value),
        }
    }

    /// Serializes this node's kind and constraints as wire keys.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        out.insert(
            "type".to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        match self {
            Validator::Integer(v) => v.write_fields(&mut out),
            Validator::Number(v) => v.write_fields(&mut out),
            Validator::String(v) => v.write_fields(&mut out),
            Validator::Boolean(_) => {}
            Validator::Array(v) => v.write_fields(&mut out),
            Validator::Object(v) => v.write_fields(&mut out),
        }
        Value::Object(out)
    }

    /// Checks a JSON value against this node's constraints, accumulating
    /// every violation rather than stopping at the first.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<(), ValidationErrors> {
        match self {
            Validator::Integer(v) => v.validate(value, path).map(|_| ()),
            Validator::Number(v) => v.validate(value, path).map(|_| ()),
            Validator::String(v) => v.validate(value, path).map(|_| ()),
            Validator::Boolean(v) => v.validate(value, path).map(|_| ()),
            Validator::Array(v) => v.validate(value, path),
            Validator::Object(v) => v.validate(value, path),
        }
    }
}

impl Hash for Validator {
    /// Hashes the kind tag only. Coarse, but equality is only ever used for
    /// pairwise comparisons, and equal validators share a kind.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
    }
}

/// The JSON type name of a value, for diagnostics.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
