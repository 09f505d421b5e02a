//! # Blueprint
//!
//! Derives JSON Schema documents and runtime validator trees from
//! declarative type descriptions, and parses schema documents back into the
//! same in-memory model.
//!
//! ## Overview
//!
//! A [`TypeDesc`] describes a native data type: its JSON kind, its enum
//! variants, its array element type, or its annotated members. From one
//! description the crate builds two artifacts that mirror each other:
//!
//! - [`Schema`]: the publishable, serializable description (title, kind,
//!   property map, required names).
//! - [`Validator`]: the executable checker, one node per schema node, each
//!   owning its constraints and (for arrays and objects) its children.
//!
//! [`Schema::parse`] runs the opposite direction, rebuilding a schema model
//! from wire bytes.
//!
//! ## Example
//!
//! ```rust
//! use blueprint::{Constraints, Schema, StructDesc, TypeDesc};
//!
//! let person = TypeDesc::Struct(
//!     StructDesc::new("Person")
//!         .field_with("firstName", TypeDesc::Str, Constraints::new().required())
//!         .field_with("lastName", TypeDesc::Str, Constraints::new().required())
//!         .field_with(
//!             "age",
//!             TypeDesc::Int,
//!             Constraints::new().description("Age in years").minimum(0.0),
//!         ),
//! );
//!
//! let schema = Schema::create(&person).unwrap();
//! assert_eq!(schema.title, "Person");
//! assert_eq!(schema.required, ["firstName", "lastName"]);
//! ```

pub mod constraints;
pub mod describe;
pub mod error;
pub mod kind;
pub mod node;
pub mod path;
pub mod schema;
pub mod validator;

pub use constraints::Constraints;
pub use describe::{Describe, EnumDesc, ExportFlags, MemberDesc, MemberOrigin, StructDesc, TypeDesc};
pub use error::{ParseError, SchemaError, ValidationError, ValidationErrors};
pub use kind::ValueKind;
pub use node::NodeExt;
pub use path::{JsonPath, PathSegment};
pub use schema::{PropertyVariant, Schema, SchemaProperty};
pub use validator::{
    compile, ArrayValidator, BooleanValidator, BoundSchema, IntegerValidator, NumberValidator,
    ObjectValidator, StringValidator, Validator,
};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
