//! Actions that drive the survey flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::AnswerMap;

/// A discrete input to the flow state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyAction {
    /// Leave the intro screen and enter the first step.
    Start,

    /// Submit the current step's answers. `with_feedback` routes through the
    /// step's book passage before the next step.
    SubmitStep {
        answers: AnswerMap,
        with_feedback: bool,
    },

    /// Leave the feedback screen for the next step, or finish the run when
    /// the last step was just submitted.
    Advance,
}

impl fmt::Display for SurveyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurveyAction::Start => "Start",
            SurveyAction::SubmitStep { .. } => "SubmitStep",
            SurveyAction::Advance => "Advance",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AnswerValue, FieldId};

    #[test]
    fn display_names_the_action_without_payload() {
        let mut answers = AnswerMap::new();
        answers.set(
            FieldId::new("genero-coincide").unwrap(),
            AnswerValue::number(80),
        );
        let action = SurveyAction::SubmitStep {
            answers,
            with_feedback: true,
        };

        assert_eq!(format!("{}", SurveyAction::Start), "Start");
        assert_eq!(format!("{}", action), "SubmitStep");
        assert_eq!(format!("{}", SurveyAction::Advance), "Advance");
    }

    #[test]
    fn submit_step_round_trips_through_json() {
        let mut answers = AnswerMap::new();
        answers.set(
            FieldId::new("hijes-tenes").unwrap(),
            AnswerValue::text("1"),
        );
        let action = SurveyAction::SubmitStep {
            answers,
            with_feedback: false,
        };

        let json = serde_json::to_string(&action).unwrap();
        let back: SurveyAction = serde_json::from_str(&json).unwrap();

        assert_eq!(back, action);
    }
}
