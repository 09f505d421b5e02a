//! Paths to values in nested JSON structures.

use std::fmt::{self, Display};

/// A segment of a [`JsonPath`]: either a field access or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// A path to a value in a nested JSON structure, e.g. `items[2].name`.
///
/// Paths are cheap immutable values; `push_field` and `push_index` return
/// extended copies so a parent path can be shared across sibling checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The empty path, addressing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// True if the path has no segments.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".{}", name)?;
                    } else {
                        write!(f, "{}", name)?;
                    }
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        assert!(JsonPath::root().is_root());
        assert_eq!(JsonPath::root().to_string(), "");
    }

    #[test]
    fn test_display_mixes_fields_and_indexes() {
        let path = JsonPath::root()
            .push_field("items")
            .push_index(2)
            .push_field("name");
        assert_eq!(path.to_string(), "items[2].name");
    }

    #[test]
    fn test_push_does_not_mutate_parent() {
        let parent = JsonPath::root().push_field("a");
        let child = parent.push_field("b");
        assert_eq!(parent.to_string(), "a");
        assert_eq!(child.to_string(), "a.b");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            JsonPath::root().push_field("x").push_index(0),
            JsonPath::root().push_field("x").push_index(0)
        );
        assert_ne!(JsonPath::root().push_field("x"), JsonPath::root());
    }
}
