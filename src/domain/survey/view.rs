//! SurveyView enum for tracking which screen a survey run is on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The screen a survey run currently shows.
///
/// `Questions` loops onto itself when a step is submitted without feedback:
/// the step advances but the view kind stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyView {
    #[default]
    Intro,
    Questions,
    Feedback,
    End,
}

impl SurveyView {
    /// Returns true if field edits are accepted in this view.
    pub fn accepts_edits(&self) -> bool {
        matches!(self, SurveyView::Questions)
    }
}

impl StateMachine for SurveyView {
    /// Validates a transition from this view to another.
    ///
    /// Valid transitions:
    /// - Intro -> Questions
    /// - Questions -> Questions
    /// - Questions -> Feedback
    /// - Feedback -> Questions
    /// - Feedback -> End
    fn can_transition_to(&self, target: &SurveyView) -> bool {
        use SurveyView::*;
        matches!(
            (self, target),
            (Intro, Questions)
                | (Questions, Questions)
                | (Questions, Feedback)
                | (Feedback, Questions)
                | (Feedback, End)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SurveyView::*;
        match self {
            Intro => vec![Questions],
            Questions => vec![Questions, Feedback],
            Feedback => vec![Questions, End],
            End => vec![],
        }
    }
}

impl fmt::Display for SurveyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurveyView::Intro => "Intro",
            SurveyView::Questions => "Questions",
            SurveyView::Feedback => "Feedback",
            SurveyView::End => "End",
        };
        write!(f, "{}", s)
    }
}
