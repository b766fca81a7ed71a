//! Error types for answer validation.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::foundation::FieldId;

/// The constraint a present answer value failed to satisfy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueConstraint {
    /// The value must be one of a fixed set of stored option values.
    #[error("Value must be one of: {}", .permitted.join(", "))]
    OneOf { permitted: Vec<String> },

    /// The value must parse as an integer within the configured bounds.
    #[error("{}", integer_bounds_message(.min, .max))]
    IntegerBounds { min: Option<i64>, max: Option<i64> },

    /// The value must be a number on the slider scale.
    #[error("Value must be between {min} and {max}")]
    SliderRange { min: i64, max: i64 },
}

fn integer_bounds_message(min: &Option<i64>, max: &Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("Value must be between {min} and {max}"),
        (Some(min), None) => format!("Value must be at least {min}"),
        (None, Some(max)) => format!("Value must be at most {max}"),
        (None, None) => "Value must be a whole number".to_string(),
    }
}

/// A single field's validation outcome when it fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    RequiredFieldMissing,

    #[error("{0}")]
    OutOfRange(ValueConstraint),
}

/// All field failures from evaluating one step's rules.
///
/// Every rule is checked even after the first failure, so a form can surface
/// messages for each offending field at once.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("Validation failed for {n} field(s)", n = .errors.len())]
pub struct ValidationFailure {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ValidationFailure {
    /// Creates an empty failure set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for a field, replacing any earlier one.
    pub fn add(&mut self, field: FieldId, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Returns the failure recorded for a field, if any.
    pub fn get(&self, field: &FieldId) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates failures in field-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &FieldError)> {
        self.errors.iter()
    }
}
