//! Step definitions: one questionnaire page plus its feedback passage.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, FieldId, QuestionKey, StepKey, StepOrder};

use super::Question;

/// Contextual passage shown between a step and the next.
///
/// `primary_text` is the quoted passage itself, `secondary_text` the
/// attribution line rendered after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPassage {
    pub primary_text: String,
    pub secondary_text: String,
}

impl FeedbackPassage {
    /// Creates a feedback passage.
    pub fn new(primary_text: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
        }
    }
}

/// One page of the questionnaire.
///
/// Identified by `order` for sequencing and by `key` for namespacing its
/// questions' field identifiers. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    order: StepOrder,
    key: StepKey,
    questions: Vec<Question>,
    feedback: FeedbackPassage,
}

impl Step {
    /// Creates a step, validating its question list.
    pub fn new(
        order: StepOrder,
        key: StepKey,
        questions: Vec<Question>,
        feedback: FeedbackPassage,
    ) -> Result<Self, DomainError> {
        let step = Self {
            order,
            key,
            questions,
            feedback,
        };
        step.validate()?;
        Ok(step)
    }

    /// Checks the structural invariants: at least one question, unique keys.
    ///
    /// Also run by the catalog so deserialized steps get the same checks.
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.questions.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Step '{}' must contain at least one question", self.key),
            )
            .with_detail("step_key", self.key.as_str()));
        }
        for (index, question) in self.questions.iter().enumerate() {
            let duplicated = self.questions[..index]
                .iter()
                .any(|earlier| earlier.key() == question.key());
            if duplicated {
                return Err(DomainError::new(
                    ErrorCode::DuplicateKey,
                    format!(
                        "Step '{}' declares question key '{}' more than once",
                        self.key,
                        question.key()
                    ),
                )
                .with_detail("step_key", self.key.as_str())
                .with_detail("question_key", question.key().as_str()));
            }
        }
        Ok(())
    }

    /// Returns the 1-based position in the catalog.
    pub fn order(&self) -> StepOrder {
        self.order
    }

    /// Returns the step key.
    pub fn key(&self) -> &StepKey {
        &self.key
    }

    /// Returns the questions in render order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the feedback passage.
    pub fn feedback(&self) -> &FeedbackPassage {
        &self.feedback
    }

    /// Looks up a question by key.
    pub fn question(&self, key: &QuestionKey) -> Option<&Question> {
        self.questions.iter().find(|q| q.key() == key)
    }

    /// Returns the global field identifiers of every question, in order.
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.questions
            .iter()
            .map(|q| q.field_id(&self.key))
            .collect()
    }
}
