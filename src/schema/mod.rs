//! The serializable schema model.
//!
//! A [`Schema`] is the declarative description of a data shape: a title, a
//! JSON value kind, a property map, and an ordered required-name list. It is
//! built from a type description ([`Schema::create`]), parsed back from wire
//! bytes ([`Schema::parse`]), and serialized to the JSON Schema subset this
//! crate models ([`Schema::to_json`]).

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::constraints::Constraints;
use crate::describe::{Describe, EnumDesc, ExportFlags, TypeDesc};
use crate::error::{ParseError, SchemaError};
use crate::kind::ValueKind;
use crate::node::NodeExt;

/// One entry of an enum-variant (`anyOf`) property: a single literal and its
/// human-readable description.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyVariant {
    pub values: Vec<String>,
    pub description: Option<String>,
}

/// A single property of an object schema.
///
/// A property is populated in exactly one of two modes: a typed scalar
/// (`kind` set, `any_of` empty) or an enumerated-variant property (`any_of`
/// populated, `kind` unset). The constructors enforce this; never set both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaProperty {
    pub kind: Option<ValueKind>,
    pub description: Option<String>,
    pub required: bool,
    pub minimum: Option<f64>,
    pub any_of: Vec<PropertyVariant>,
}

impl SchemaProperty {
    /// A typed scalar property carrying the member's declared constraints.
    pub fn scalar(kind: ValueKind, constraints: Option<&Constraints>) -> Self {
        let mut property = Self {
            kind: Some(kind),
            ..Self::default()
        };
        if let Some(c) = constraints {
            property.description = c.description.clone();
            property.minimum = c.minimum;
            property.required = c.required;
        }
        property
    }

    /// An enum-variant property: one `anyOf` entry per variant, each carrying
    /// the single matching literal and the variant name as description.
    pub fn from_enum(desc: &EnumDesc) -> Self {
        Self {
            any_of: desc
                .variants
                .iter()
                .map(|v| PropertyVariant {
                    values: vec![v.clone()],
                    description: Some(v.clone()),
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Rebuilds a property from a parsed wire node.
    ///
    /// Known gap: no fields are populated yet, so parsed schemas compare
    /// property sets by name only. Round-trip guarantees cover `title` and
    /// `required`.
    pub fn from_node(_node: &Value) -> Self {
        Self::default()
    }

    fn to_json(&self) -> Value {
        if !self.any_of.is_empty() {
            let variants: Vec<Value> = self
                .any_of
                .iter()
                .map(|v| {
                    let mut entry = Map::new();
                    entry.insert("enum".to_string(), json!(v.values));
                    if let Some(ref description) = v.description {
                        entry.insert("description".to_string(), json!(description));
                    }
                    Value::Object(entry)
                })
                .collect();
            return json!({ "anyOf": variants });
        }

        let mut out = Map::new();
        if let Some(kind) = self.kind {
            out.insert("type".to_string(), json!(kind.as_str()));
        }
        if let Some(ref description) = self.description {
            out.insert("description".to_string(), json!(description));
        }
        if let Some(minimum) = self.minimum {
            out.insert("minimum".to_string(), json!(minimum));
        }
        Value::Object(out)
    }
}

/// The declarative description of a data shape.
///
/// Structural equality compares the property map as a set (insertion order
/// is irrelevant) but the required list as a sequence (order matters); the
/// asymmetry is intentional. For non-empty object schemas every required
/// name is a key of `properties` by construction.
///
/// # Example
///
/// ```rust
/// use blueprint::{Constraints, Schema, StructDesc, TypeDesc, ValueKind};
///
/// let desc = StructDesc::new("Person")
///     .field_with("firstName", TypeDesc::Str, Constraints::new().required());
/// let schema = Schema::create(&TypeDesc::Struct(desc)).unwrap();
///
/// assert_eq!(schema.title, "Person");
/// assert_eq!(schema.kind, ValueKind::Object);
/// assert_eq!(schema.required, ["firstName"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub title: String,
    pub kind: ValueKind,
    pub properties: IndexMap<String, SchemaProperty>,
    pub required: Vec<String>,
}

impl Schema {
    /// Builds the schema for a type implementing [`Describe`].
    pub fn of<T: Describe>() -> Result<Self, SchemaError> {
        Self::create(&T::describe())
    }

    /// Builds the schema for a type description, walking both member origins.
    pub fn create(ty: &TypeDesc) -> Result<Self, SchemaError> {
        Self::create_with_flags(ty, ExportFlags::default())
    }

    /// Builds the schema for a type description, walking only the member
    /// origins selected by `flags`.
    pub fn create_with_flags(ty: &TypeDesc, flags: ExportFlags) -> Result<Self, SchemaError> {
        let kind = ty.kind()?;

        let mut properties = IndexMap::new();
        let mut required = Vec::new();
        let mut title = ty.name().to_string();

        if let TypeDesc::Struct(desc) = ty {
            if let Some(ref declared) = desc.title {
                title = declared.clone();
            }
            for member in desc.members(flags) {
                let property = Self::member_property(&member.ty, member.constraints.as_ref())?;
                if property.required {
                    required.push(member.name.clone());
                }
                properties.insert(member.name.clone(), property);
            }
        }

        Ok(Self {
            title,
            kind,
            properties,
            required,
        })
    }

    /// Builds the property for a single member. Enum member types are
    /// resolved before generic kind dispatch.
    fn member_property(
        ty: &TypeDesc,
        constraints: Option<&Constraints>,
    ) -> Result<SchemaProperty, SchemaError> {
        if let TypeDesc::Enum(desc) = ty {
            return Ok(SchemaProperty::from_enum(desc));
        }
        Ok(SchemaProperty::scalar(ty.kind()?, constraints))
    }

    /// Parses schema bytes into the model.
    ///
    /// The wire document must be an object-rooted schema; the parsed kind is
    /// fixed to `object` accordingly.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        let root: Value = serde_json::from_str(text)?;
        let fields = match root {
            Value::Object(ref fields) => fields,
            other => return Err(ParseError::RootNotObject { got: other }),
        };

        let title = match fields.get("title") {
            Some(node) => node.expect_str("title")?.to_string(),
            None => String::new(),
        };

        let mut properties = IndexMap::new();
        if let Some(node) = fields.get("properties") {
            let entries = node.as_object().ok_or_else(|| ParseError::Decode {
                key: "properties".to_string(),
                expected: "an object",
                got: node.clone(),
            })?;
            for (name, value) in entries {
                properties.insert(name.clone(), SchemaProperty::from_node(value));
            }
        }

        let mut required = Vec::new();
        if let Some(node) = fields.get("required") {
            let names = node.as_array().ok_or_else(|| ParseError::Decode {
                key: "required".to_string(),
                expected: "an array",
                got: node.clone(),
            })?;
            for name in names {
                required.push(name.expect_str("required")?.to_string());
            }
        }

        Ok(Self {
            title,
            kind: ValueKind::Object,
            properties,
            required,
        })
    }

    /// Serializes the schema to the modeled JSON Schema subset.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        out.insert("title".to_string(), json!(self.title));
        out.insert("type".to_string(), json!(self.kind.as_str()));
        if self.kind == ValueKind::Object {
            let properties: Map<String, Value> = self
                .properties
                .iter()
                .map(|(name, property)| (name.clone(), property.to_json()))
                .collect();
            out.insert("properties".to_string(), Value::Object(properties));
            out.insert("required".to_string(), json!(self.required));
        }
        Value::Object(out)
    }

    /// Serializes the schema to wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_json().to_string().into_bytes()
    }
}

impl Hash for Schema {
    /// Hashes by title only; coarse but consistent with equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}
