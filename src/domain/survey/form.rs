//! Live values for the step currently on screen.

use crate::domain::catalog::Step;
use crate::domain::foundation::{AnswerMap, AnswerValue, FieldId};

use super::VisibilityResolver;

/// Working copy of the answers while a step is being filled in.
///
/// Seeded on step entry from the accumulated answers so conditions that
/// reference earlier steps keep working; the entered step's own fields start
/// absent. The form is what a submit validates and merges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepForm {
    values: AnswerMap,
}

impl StepForm {
    /// Seeds the form for a step from the answers accumulated so far.
    pub fn seed(step: &Step, accumulated: &AnswerMap) -> Self {
        let mut values = accumulated.clone();
        for field in step.field_ids() {
            values.clear(&field);
        }
        Self { values }
    }

    /// Writes a single field edit.
    pub fn set(&mut self, field: FieldId, value: AnswerValue) {
        self.values.set(field, value);
    }

    /// Writes a choice edit and clears the fields of questions the choice
    /// just hid.
    pub fn change_choice(&mut self, step: &Step, field: FieldId, value: AnswerValue) {
        VisibilityResolver::apply_change(step, &mut self.values, field, value);
    }

    /// Returns a field's current value.
    pub fn get(&self, field: &FieldId) -> Option<&AnswerValue> {
        self.values.get(field)
    }

    /// The live value map.
    pub fn values(&self) -> &AnswerMap {
        &self.values
    }
}
