//! Conditional visibility over a step's questions.

use crate::domain::catalog::{Question, Step};
use crate::domain::foundation::{AnswerMap, AnswerValue, FieldId};

/// Stateless resolver for question visibility and the clearing cascade.
pub struct VisibilityResolver;

impl VisibilityResolver {
    /// Returns the questions whose condition is absent or currently true,
    /// in declaration order.
    pub fn visible_questions<'a>(step: &'a Step, answers: &AnswerMap) -> Vec<&'a Question> {
        step.questions()
            .iter()
            .filter(|question| question.is_visible(answers))
            .collect()
    }

    /// Applies an answer change, clearing the fields of questions the change
    /// just hid.
    ///
    /// Every condition is judged against the values as they stand right after
    /// the change, and the clears land only once all decisions are made. A
    /// condition chained on a field cleared in the same pass keeps its stale
    /// value until the next change.
    pub fn apply_change(step: &Step, values: &mut AnswerMap, field: FieldId, value: AnswerValue) {
        values.set(field, value);
        let hidden: Vec<FieldId> = step
            .questions()
            .iter()
            .filter(|question| !question.is_visible(values))
            .map(|question| question.field_id(step.key()))
            .collect();
        for field in &hidden {
            values.clear(field);
        }
    }
}
