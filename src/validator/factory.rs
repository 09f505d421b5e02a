//! Validator construction.
//!
//! The factory dispatches on a type's JSON kind and assembles the composite
//! tree: array element types and object member types recurse through
//! [`compile`], which pairs each child's schema with its validator.
//!
//! Constraint copying is conditional throughout: a bound is applied only
//! when the descriptor declares one, so absent constraints never clobber a
//! node's defaults, and a declared bound of exactly zero survives.

use std::str::FromStr;

use crate::constraints::Constraints;
use crate::describe::{Describe, MemberOrigin, TypeDesc};
use crate::error::SchemaError;
use crate::kind::ValueKind;
use crate::schema::Schema;

use super::{
    ArrayValidator, BooleanValidator, BoundSchema, IntegerValidator, NumberValidator,
    ObjectValidator, StringValidator, Validator,
};

impl Validator {
    /// Builds the validator for a type implementing [`Describe`], walking
    /// members with an empty top-level descriptor.
    pub fn of<T: Describe>() -> Result<Validator, SchemaError> {
        Self::from_type(&T::describe(), Some(&Constraints::new()), None)
    }

    /// Builds the validator for a type description and its declared
    /// constraints, resolving the kind first.
    pub fn from_type(
        ty: &TypeDesc,
        constraints: Option<&Constraints>,
        item_constraints: Option<&Constraints>,
    ) -> Result<Validator, SchemaError> {
        Self::create(ty.kind()?, Some(ty), constraints, item_constraints)
    }

    /// Builds an unconstrained validator from a kind's wire name.
    pub fn from_kind_name(name: &str) -> Result<Validator, SchemaError> {
        Self::create(ValueKind::from_str(name)?, None, None, None)
    }

    /// Builds a validator for `kind`, copying declared constraints and
    /// recursing into element and member types when a type is supplied.
    pub fn create(
        kind: ValueKind,
        ty: Option<&TypeDesc>,
        constraints: Option<&Constraints>,
        item_constraints: Option<&Constraints>,
    ) -> Result<Validator, SchemaError> {
        match kind {
            ValueKind::Integer => {
                let mut v = IntegerValidator::new();
                if let Some(c) = constraints {
                    if let Some(min) = c.minimum {
                        v.minimum = Some(min as i64);
                    }
                    if c.exclusive_minimum {
                        v.exclusive_minimum = true;
                    }
                    if let Some(max) = c.maximum {
                        v.maximum = Some(max as i64);
                    }
                    if c.exclusive_maximum {
                        v.exclusive_maximum = true;
                    }
                    if let Some(m) = c.multiple_of {
                        v.multiple_of = Some(m as i64);
                    }
                }
                Ok(Validator::Integer(v))
            }

            ValueKind::Number => {
                let mut v = NumberValidator::new();
                if let Some(c) = constraints {
                    if let Some(min) = c.minimum {
                        v.minimum = Some(min);
                    }
                    if c.exclusive_minimum {
                        v.exclusive_minimum = true;
                    }
                    if let Some(max) = c.maximum {
                        v.maximum = Some(max);
                    }
                    if c.exclusive_maximum {
                        v.exclusive_maximum = true;
                    }
                    if let Some(m) = c.multiple_of {
                        v.multiple_of = Some(m);
                    }
                }
                Ok(Validator::Number(v))
            }

            ValueKind::String => {
                let mut v = StringValidator::new();
                if let Some(c) = constraints {
                    if let Some(ref pattern) = c.pattern {
                        v.pattern = Some(pattern.clone());
                    }
                }
                Ok(Validator::String(v))
            }

            ValueKind::Boolean => Ok(Validator::Boolean(BooleanValidator::new())),

            ValueKind::Array => {
                let mut v = ArrayValidator::new();
                if let Some(c) = constraints {
                    if let Some(min) = c.min_items {
                        v.min_items = Some(min);
                    }
                    if let Some(max) = c.max_items {
                        v.max_items = Some(max);
                    }
                    if let Some(element) = ty.and_then(TypeDesc::element) {
                        // The element descriptor becomes the element's own
                        // constraint set; defaults to empty when none given.
                        let empty = Constraints::new();
                        let element_constraints = item_constraints.unwrap_or(&empty);
                        v.items = Some(Box::new(compile(element, Some(element_constraints), None)?));
                    }
                }
                Ok(Validator::Array(v))
            }

            ValueKind::Object => {
                let mut v = ObjectValidator::new();
                if let Some(c) = constraints {
                    if let Some(min) = c.min_properties {
                        if min > 0 {
                            v.min_properties = Some(min);
                        }
                    }
                    if let Some(TypeDesc::Struct(desc)) = ty {
                        for member in desc.members(c.export) {
                            // A bare public field is present but
                            // unconstrained; a bare accessor is skipped.
                            let empty = Constraints::new();
                            let member_constraints = match (&member.constraints, member.origin) {
                                (Some(mc), _) => mc,
                                (None, MemberOrigin::Field) => &empty,
                                (None, MemberOrigin::Accessor) => continue,
                            };
                            let bound = compile(
                                &member.ty,
                                Some(member_constraints),
                                member.item_constraints.as_ref(),
                            )?;
                            if member_constraints.required {
                                v.required.push(member.name.clone());
                            }
                            v.properties.insert(member.name.clone(), bound);
                        }
                    }
                }
                Ok(Validator::Object(v))
            }
        }
    }
}

/// Builds the schema/validator pair for a type description; the recursion
/// step for array items and object properties.
pub fn compile(
    ty: &TypeDesc,
    constraints: Option<&Constraints>,
    item_constraints: Option<&Constraints>,
) -> Result<BoundSchema, SchemaError> {
    let flags = constraints.map(|c| c.export).unwrap_or_default();
    Ok(BoundSchema {
        schema: Schema::create_with_flags(ty, flags)?,
        validator: Validator::from_type(ty, constraints, item_constraints)?,
    })
}
