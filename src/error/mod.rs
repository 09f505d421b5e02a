//! Error types.
//!
//! Fatal errors (unsupported types, cross-variant assignment, malformed wire
//! input) live in [`SchemaError`] and [`ParseError`]. Accumulated value
//! validation failures live in [`ValidationError`] and [`ValidationErrors`].

mod schema_error;
mod validation_error;

pub use schema_error::{ParseError, SchemaError};
pub use validation_error::{ValidationError, ValidationErrors};
