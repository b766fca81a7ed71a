//! Error types for survey flow operations.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::validation::ValidationFailure;

use super::SurveyView;

/// Errors that can occur while driving a survey run.
#[derive(Debug, Clone, Error)]
pub enum SurveyError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: SurveyView, to: SurveyView },

    #[error("Step rejected: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Catalog error: {0}")]
    Catalog(#[from] DomainError),
}

impl SurveyError {
    /// Returns the machine-readable code for the error.
    ///
    /// Catalog errors carry their own code through unchanged.
    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SurveyError::Validation(_) => ErrorCode::ValidationFailed,
            SurveyError::Catalog(err) => err.code,
        }
    }

    /// Returns the field failures when the error is a validation rejection.
    pub fn validation_failure(&self) -> Option<&ValidationFailure> {
        match self {
            SurveyError::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldId;
    use crate::domain::validation::FieldError;

    #[test]
    fn invalid_transition_displays_correctly() {
        let err = SurveyError::InvalidTransition {
            from: SurveyView::Intro,
            to: SurveyView::End,
        };
        assert_eq!(format!("{}", err), "Invalid transition from Intro to End");
    }

    #[test]
    fn validation_displays_field_count() {
        let mut failure = ValidationFailure::new();
        failure.add(
            FieldId::new("edad-actual").unwrap(),
            FieldError::RequiredFieldMissing,
        );
        let err = SurveyError::from(failure.clone());

        assert_eq!(
            format!("{}", err),
            "Step rejected: Validation failed for 1 field(s)"
        );
        assert_eq!(err.validation_failure(), Some(&failure));
    }

    #[test]
    fn non_validation_errors_expose_no_failure() {
        let err = SurveyError::InvalidTransition {
            from: SurveyView::Feedback,
            to: SurveyView::Feedback,
        };
        assert!(err.validation_failure().is_none());
    }

    #[test]
    fn each_variant_reports_its_machine_code() {
        let transition = SurveyError::InvalidTransition {
            from: SurveyView::Intro,
            to: SurveyView::End,
        };
        assert_eq!(transition.code(), ErrorCode::InvalidStateTransition);

        let mut failure = ValidationFailure::new();
        failure.add(
            FieldId::new("edad-actual").unwrap(),
            FieldError::RequiredFieldMissing,
        );
        assert_eq!(
            SurveyError::from(failure).code(),
            ErrorCode::ValidationFailed
        );

        let missing = DomainError::new(ErrorCode::StepNotFound, "Step 7 not found");
        assert_eq!(SurveyError::from(missing).code(), ErrorCode::StepNotFound);
    }
}
