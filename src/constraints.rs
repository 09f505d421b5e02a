//! Per-member constraint descriptors.

use crate::describe::ExportFlags;

/// The declared constraints for a member (or for an array's elements).
///
/// All numeric bounds and counts are explicit `Option`s: an unset constraint
/// is `None`, so a legitimate constraint value of exactly zero (say
/// `minimum(0.0)`) is representable and survives construction. The source
/// design used sentinel values (NaN, 0) for "unset" and could not tell the
/// two apart; that ambiguity is deliberately not carried over.
///
/// # Example
///
/// ```rust
/// use blueprint::Constraints;
///
/// let age = Constraints::new()
///     .description("Age in years")
///     .minimum(0.0);
/// assert_eq!(age.minimum, Some(0.0));
/// assert!(!age.required);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    pub required: bool,
    pub description: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: bool,
    pub exclusive_maximum: bool,
    pub multiple_of: Option<f64>,
    pub pattern: Option<String>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub min_properties: Option<usize>,
    /// Which member origins are walked when this member is an aggregate.
    pub export: ExportFlags,
}

impl Constraints {
    /// An empty descriptor: nothing required, nothing constrained.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Marks the minimum bound as exclusive. Meaningful only with a minimum.
    pub fn exclusive_minimum(mut self) -> Self {
        self.exclusive_minimum = true;
        self
    }

    /// Marks the maximum bound as exclusive. Meaningful only with a maximum.
    pub fn exclusive_maximum(mut self) -> Self {
        self.exclusive_maximum = true;
        self
    }

    pub fn multiple_of(mut self, multiple_of: f64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn min_items(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn min_properties(mut self, min_properties: usize) -> Self {
        self.min_properties = Some(min_properties);
        self
    }

    pub fn export(mut self, export: ExportFlags) -> Self {
        self.export = export;
        self
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            required: false,
            description: None,
            minimum: None,
            maximum: None,
            exclusive_minimum: false,
            exclusive_maximum: false,
            multiple_of: None,
            pattern: None,
            min_items: None,
            max_items: None,
            min_properties: None,
            export: ExportFlags::default(),
        }
    }
}
