//! Validation module - Per-step answer validation.
//!
//! Rules are compiled from a step's question list into static data and
//! evaluated in one pass over the answer map, collecting every failing field
//! rather than stopping at the first.

mod field_error;
mod rules;

pub use field_error::{FieldError, ValidationFailure, ValueConstraint};
pub use rules::{FieldRule, StepRules};
