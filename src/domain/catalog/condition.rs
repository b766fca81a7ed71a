//! Visibility conditions for conditional questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerMap, FieldId};

/// Predicate over the current answer mapping deciding whether a question is
/// shown and required.
///
/// Conditions are data rather than closures so catalogs stay serializable.
/// They reference a controlling field by its global identifier and compare
/// against choice option values; an absent field never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityCondition {
    /// True when the controlling field equals the given option value.
    AnswerEquals { field: FieldId, value: String },

    /// True when the controlling field equals any of the given option values.
    AnswerIn { field: FieldId, values: Vec<String> },
}

impl VisibilityCondition {
    /// Creates an equality condition on a controlling field.
    pub fn answer_equals(field: FieldId, value: impl Into<String>) -> Self {
        VisibilityCondition::AnswerEquals {
            field,
            value: value.into(),
        }
    }

    /// Creates a membership condition on a controlling field.
    pub fn answer_in(field: FieldId, values: Vec<String>) -> Self {
        VisibilityCondition::AnswerIn { field, values }
    }

    /// Returns the field this condition observes.
    pub fn field(&self) -> &FieldId {
        match self {
            VisibilityCondition::AnswerEquals { field, .. } => field,
            VisibilityCondition::AnswerIn { field, .. } => field,
        }
    }

    /// Evaluates the condition against the current answers.
    pub fn evaluate(&self, answers: &AnswerMap) -> bool {
        match self {
            VisibilityCondition::AnswerEquals { field, value } => answers
                .get(field)
                .map_or(false, |answer| answer.matches_choice(value)),
            VisibilityCondition::AnswerIn { field, values } => {
                answers.get(field).map_or(false, |answer| {
                    values.iter().any(|value| answer.matches_choice(value))
                })
            }
        }
    }
}
