//! Accumulated value-validation failures.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single constraint violation found while validating a JSON value.
///
/// Each violation records where it occurred, what was expected, what was
/// actually there, and a machine-readable code (`min_value`, `pattern`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Location of the offending value.
    pub path: JsonPath,
    /// Human-readable description of the violation.
    pub message: String,
    /// The actual value, formatted for diagnostics.
    pub got: Option<String>,
    /// What the constraint expected.
    pub expected: Option<String>,
    /// Machine-readable code identifying the violated constraint.
    pub code: String,
}

impl ValidationError {
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "validation_error".to_string(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }
        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A non-empty collection of validation errors.
///
/// Failures in a `Validation<T, ValidationErrors>` always carry at least one
/// error; the `Semigroup` impl lets failures from sibling checks combine
/// instead of short-circuiting.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Wraps a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Wraps a vec of errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ValidationErrors requires at least one error"))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns all errors carrying the given code.
    pub fn with_code(&self, code: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fields() {
        let error = ValidationError::new(JsonPath::root().push_field("age"), "must be at least 0")
            .with_code("min_value")
            .with_got("-3")
            .with_expected("at least 0");

        assert_eq!(error.code, "min_value");
        assert_eq!(error.got, Some("-3".to_string()));
        assert_eq!(error.expected, Some("at least 0".to_string()));
    }

    #[test]
    fn test_display_includes_path_and_context() {
        let error = ValidationError::new(JsonPath::root().push_field("name"), "too short")
            .with_expected("at least 3 chars")
            .with_got("ab");

        let display = error.to_string();
        assert!(display.contains("name: too short"));
        assert!(display.contains("expected: at least 3 chars"));
        assert!(display.contains("got: ab"));
    }

    #[test]
    fn test_root_path_display() {
        let error = ValidationError::new(JsonPath::root(), "expected object");
        assert!(error.to_string().starts_with("(root): "));
    }

    #[test]
    fn test_combine_accumulates() {
        let a = ValidationErrors::single(ValidationError::new(JsonPath::root(), "a"));
        let b = ValidationErrors::single(ValidationError::new(JsonPath::root(), "b"));
        let combined = a.combine(b);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined.first().message, "a");
    }

    #[test]
    fn test_with_code_filters() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::new(JsonPath::root(), "a").with_code("required"),
            ValidationError::new(JsonPath::root(), "b").with_code("pattern"),
            ValidationError::new(JsonPath::root(), "c").with_code("required"),
        ]);

        assert_eq!(errors.with_code("required").len(), 2);
        assert_eq!(errors.with_code("pattern").len(), 1);
    }
}
