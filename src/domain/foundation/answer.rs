//! Answer values and the accumulated answer mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

use super::FieldId;

/// A single respondent answer.
///
/// Button choices and numeric inputs arrive as text (the renderer hands over
/// what was typed or clicked), sliders as numbers, checkboxes as a selection
/// of option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
    Selection(Vec<String>),
}

impl AnswerValue {
    /// Creates a text answer.
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    /// Creates a numeric answer.
    pub fn number(value: i64) -> Self {
        AnswerValue::Number(value)
    }

    /// Creates a multi-select answer.
    pub fn selection(values: Vec<String>) -> Self {
        AnswerValue::Selection(values)
    }

    /// Returns the text content, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, casting text that parses as an integer.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
            AnswerValue::Selection(_) => None,
        }
    }

    /// Returns true when the value carries no content.
    ///
    /// Empty text and empty selections count as absent for requiredness.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Number(_) => false,
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Selection(values) => values.is_empty(),
        }
    }

    /// Returns true when this value equals a choice option value.
    ///
    /// String comparison mirroring the renderer's strict equality; non-text
    /// values never match.
    pub fn matches_choice(&self, option_value: &str) -> bool {
        self.as_text() == Some(option_value)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => write!(f, "{}", s),
            AnswerValue::Selection(values) => write!(f, "{}", values.join(", ")),
        }
    }
}

/// The accumulated answer mapping: field identifier to answer value.
///
/// Grows as steps are submitted; an entry only disappears when a visibility
/// change clears the question it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<FieldId, AnswerValue>);

impl AnswerMap {
    /// Creates an empty answer mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field's value, replacing any previous entry.
    pub fn set(&mut self, field: FieldId, value: AnswerValue) {
        self.0.insert(field, value);
    }

    /// Clears a field: the entry becomes absent, not stale.
    pub fn clear(&mut self, field: &FieldId) {
        self.0.remove(field);
    }

    /// Returns a field's value, if present.
    pub fn get(&self, field: &FieldId) -> Option<&AnswerValue> {
        self.0.get(field)
    }

    /// Returns true when the field has an entry.
    pub fn contains(&self, field: &FieldId) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the number of answered fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no field has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in field-identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &AnswerValue)> {
        self.0.iter()
    }

    /// Shallow merge: incoming overwrites existing on key collision, all
    /// other keys are preserved. Pure; neither input is modified.
    pub fn merge(&self, incoming: &AnswerMap) -> AnswerMap {
        let mut merged = self.0.clone();
        for (field, value) in &incoming.0 {
            merged.insert(field.clone(), value.clone());
        }
        Self(merged)
    }

    /// Renders the mapping as a JSON object for host consumption.
    pub fn to_json_value(&self) -> JsonValue {
        serde_json::to_value(self).expect("Answer map serialization should never fail")
    }
}

impl FromIterator<(FieldId, AnswerValue)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (FieldId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
