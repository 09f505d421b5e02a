//! Declarative type descriptions.
//!
//! Schema and validator construction both walk a [`TypeDesc`], a value-level
//! description of a native type: its JSON kind, its enum variants, its array
//! element type, or its annotated members. Descriptions come either from the
//! [`Describe`] trait (implemented for the builtin types) or from the
//! [`StructDesc`]/[`EnumDesc`] builders.

use bitflags::bitflags;

use crate::constraints::Constraints;
use crate::error::SchemaError;
use crate::kind::ValueKind;

bitflags! {
    /// Which member origins are walked when recursing into an aggregate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ExportFlags: u8 {
        const PUBLIC_FIELDS = 1;
        const PUBLIC_ACCESSORS = 1 << 1;
    }
}

impl Default for ExportFlags {
    /// Both fields and accessors are walked by default.
    fn default() -> Self {
        Self::PUBLIC_FIELDS | Self::PUBLIC_ACCESSORS
    }
}

/// Whether a member is a plain field or an accessor (getter-backed property).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOrigin {
    Field,
    Accessor,
}

/// A value-level description of a native type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDesc {
    /// Any integral numeric type.
    Int,
    /// Any floating-point numeric type.
    Float,
    Str,
    Bool,
    /// A fixed-size array of elements.
    Array(Box<TypeDesc>),
    /// A growable list of elements.
    List(Box<TypeDesc>),
    /// A closed set of named variants.
    Enum(EnumDesc),
    /// An aggregate with named, annotated members.
    Struct(StructDesc),
    /// A type with no JSON kind mapping; always fails dispatch.
    Opaque(&'static str),
}

impl TypeDesc {
    /// Maps this type to its JSON value kind.
    ///
    /// Dispatch order is a deliberate tie-break: builtin scalars first, then
    /// enums, then array-likes, then aggregates. An enum must resolve here
    /// and never fall through to the aggregate rule; callers building
    /// properties check [`is_enum`](Self::is_enum) before calling this so
    /// enum members become `anyOf` properties instead of scalar ones.
    pub fn kind(&self) -> Result<ValueKind, SchemaError> {
        match self {
            TypeDesc::Int => Ok(ValueKind::Integer),
            TypeDesc::Float => Ok(ValueKind::Number),
            TypeDesc::Str => Ok(ValueKind::String),
            TypeDesc::Bool => Ok(ValueKind::Boolean),
            TypeDesc::Enum(_) => Ok(ValueKind::String),
            TypeDesc::Array(_) | TypeDesc::List(_) => Ok(ValueKind::Array),
            TypeDesc::Struct(_) => Ok(ValueKind::Object),
            TypeDesc::Opaque(name) => Err(SchemaError::UnsupportedType(name.to_string())),
        }
    }

    /// True for enum descriptors; resolved by callers before generic dispatch.
    pub fn is_enum(&self) -> bool {
        matches!(self, TypeDesc::Enum(_))
    }

    /// The type's own name, used as a schema title fallback.
    pub fn name(&self) -> &str {
        match self {
            TypeDesc::Int => "integer",
            TypeDesc::Float => "number",
            TypeDesc::Str => "string",
            TypeDesc::Bool => "boolean",
            TypeDesc::Array(_) | TypeDesc::List(_) => "array",
            TypeDesc::Enum(e) => &e.name,
            TypeDesc::Struct(s) => &s.name,
            TypeDesc::Opaque(name) => name,
        }
    }

    /// The element type for array-like descriptors.
    pub fn element(&self) -> Option<&TypeDesc> {
        match self {
            TypeDesc::Array(elem) | TypeDesc::List(elem) => Some(elem),
            _ => None,
        }
    }
}

/// A closed set of named variants.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDesc {
    pub name: String,
    pub variants: Vec<String>,
}

impl EnumDesc {
    pub fn new(name: impl Into<String>, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

/// A member of a [`StructDesc`]: name, type, origin, and declared constraints.
///
/// `constraints: None` means the member carries no explicit annotation. For
/// fields that still means present-but-unconstrained; accessors without an
/// annotation are skipped by the validator factory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDesc {
    pub name: String,
    pub ty: TypeDesc,
    pub origin: MemberOrigin,
    pub constraints: Option<Constraints>,
    /// Constraints for the elements of an array-typed member.
    pub item_constraints: Option<Constraints>,
}

/// An aggregate type description with ordered, annotated members.
///
/// # Example
///
/// ```rust
/// use blueprint::{Constraints, StructDesc, TypeDesc};
///
/// let person = StructDesc::new("Person")
///     .field_with("firstName", TypeDesc::Str, Constraints::new().required())
///     .field_with("lastName", TypeDesc::Str, Constraints::new().required())
///     .field_with(
///         "age",
///         TypeDesc::Int,
///         Constraints::new().description("Age in years").minimum(0.0),
///     );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructDesc {
    pub name: String,
    /// Display title from type-level metadata; defaults to the type name.
    pub title: Option<String>,
    members: Vec<MemberDesc>,
}

impl StructDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            members: Vec::new(),
        }
    }

    /// Sets the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a bare public field with no annotation.
    pub fn field(self, name: impl Into<String>, ty: TypeDesc) -> Self {
        self.push(name, ty, MemberOrigin::Field, None)
    }

    /// Adds a field carrying an explicit constraint descriptor.
    pub fn field_with(self, name: impl Into<String>, ty: TypeDesc, constraints: Constraints) -> Self {
        self.push(name, ty, MemberOrigin::Field, Some(constraints))
    }

    /// Adds an accessor with no annotation.
    pub fn accessor(self, name: impl Into<String>, ty: TypeDesc) -> Self {
        self.push(name, ty, MemberOrigin::Accessor, None)
    }

    /// Adds an accessor carrying an explicit constraint descriptor.
    pub fn accessor_with(
        self,
        name: impl Into<String>,
        ty: TypeDesc,
        constraints: Constraints,
    ) -> Self {
        self.push(name, ty, MemberOrigin::Accessor, Some(constraints))
    }

    /// Attaches element constraints to the most recently added member.
    ///
    /// No-op when no member has been added yet.
    pub fn items(mut self, constraints: Constraints) -> Self {
        if let Some(last) = self.members.last_mut() {
            last.item_constraints = Some(constraints);
        }
        self
    }

    fn push(
        mut self,
        name: impl Into<String>,
        ty: TypeDesc,
        origin: MemberOrigin,
        constraints: Option<Constraints>,
    ) -> Self {
        self.members.push(MemberDesc {
            name: name.into(),
            ty,
            origin,
            constraints,
            item_constraints: None,
        });
        self
    }

    /// Enumerates members in the stable contract order: fields before
    /// accessors, declaration order within each, filtered by `flags`.
    pub fn members(&self, flags: ExportFlags) -> impl Iterator<Item = &MemberDesc> {
        let fields = self
            .members
            .iter()
            .filter(move |m| m.origin == MemberOrigin::Field && flags.contains(ExportFlags::PUBLIC_FIELDS));
        let accessors = self.members.iter().filter(move |m| {
            m.origin == MemberOrigin::Accessor && flags.contains(ExportFlags::PUBLIC_ACCESSORS)
        });
        fields.chain(accessors)
    }
}

/// Supplies a type's description from its static definition.
///
/// This is the host-language replacement for runtime reflection: builtin
/// types describe themselves, and user types hand back a [`StructDesc`] or
/// [`EnumDesc`] built once in their impl.
pub trait Describe {
    fn describe() -> TypeDesc;
}

macro_rules! describe_as {
    ($desc:expr => $($ty:ty),+ $(,)?) => {
        $(impl Describe for $ty {
            fn describe() -> TypeDesc {
                $desc
            }
        })+
    };
}

describe_as!(TypeDesc::Int => i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);
describe_as!(TypeDesc::Float => f32, f64);
describe_as!(TypeDesc::Str => String, &str);
describe_as!(TypeDesc::Bool => bool);

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDesc {
        TypeDesc::List(Box::new(T::describe()))
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDesc {
        TypeDesc::Array(Box::new(T::describe()))
    }
}
