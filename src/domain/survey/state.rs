//! Flow state and its pure transition function.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::StepCatalog;
use crate::domain::foundation::{AnswerMap, StateMachine, StepOrder};
use crate::domain::validation::StepRules;

use super::{SurveyAction, SurveyError, SurveyView};

/// Snapshot of one survey run.
///
/// Transitions never mutate in place: [`FlowState::apply`] returns the next
/// state, leaving the prior one intact. `current_step` stays on the last step
/// once the run reaches `End`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    view: SurveyView,
    current_step: StepOrder,
    answers: AnswerMap,
    max_steps: u32,
}

impl FlowState {
    /// Creates the initial state for a run over the given catalog.
    pub fn new(catalog: &StepCatalog) -> Self {
        Self {
            view: SurveyView::Intro,
            current_step: StepOrder::FIRST,
            answers: AnswerMap::new(),
            max_steps: catalog.count(),
        }
    }

    /// The screen this state shows.
    pub fn view(&self) -> SurveyView {
        self.view
    }

    /// The step currently on screen (or last shown, after `End`).
    pub fn current_step(&self) -> StepOrder {
        self.current_step
    }

    /// Answers accumulated from every submitted step.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Number of steps in the run's catalog.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// True once the run has reached `End`.
    pub fn is_complete(&self) -> bool {
        self.view == SurveyView::End
    }

    /// Applies an action, producing the next state.
    ///
    /// Submitted answers are validated against the current step's rules
    /// before being merged; a validation rejection leaves no trace on the
    /// run. The target view must be reachable in the [`SurveyView`] graph
    /// and the action must apply to the current view; anything else is
    /// rejected with `InvalidTransition`.
    pub fn apply(
        &self,
        action: SurveyAction,
        catalog: &StepCatalog,
    ) -> Result<FlowState, SurveyError> {
        let target = self.target_view(&action);
        if !self.view.can_transition_to(&target) {
            return Err(SurveyError::InvalidTransition {
                from: self.view,
                to: target,
            });
        }
        match (self.view, action) {
            (SurveyView::Intro, SurveyAction::Start) => Ok(Self {
                view: SurveyView::Questions,
                current_step: StepOrder::FIRST,
                answers: self.answers.clone(),
                max_steps: self.max_steps,
            }),
            (
                SurveyView::Questions,
                SurveyAction::SubmitStep {
                    answers,
                    with_feedback,
                },
            ) => {
                let step = catalog.step(self.current_step)?;
                StepRules::for_step(step).evaluate(&answers)?;
                let merged = self.answers.merge(&answers);
                if with_feedback {
                    Ok(Self {
                        view: SurveyView::Feedback,
                        current_step: self.current_step,
                        answers: merged,
                        max_steps: self.max_steps,
                    })
                } else {
                    Ok(Self {
                        view: SurveyView::Questions,
                        current_step: self.current_step.next_clamped(self.max_steps),
                        answers: merged,
                        max_steps: self.max_steps,
                    })
                }
            }
            (SurveyView::Feedback, SurveyAction::Advance) => {
                if self.at_last_step() {
                    Ok(Self {
                        view: SurveyView::End,
                        current_step: self.current_step,
                        answers: self.answers.clone(),
                        max_steps: self.max_steps,
                    })
                } else {
                    Ok(Self {
                        view: SurveyView::Questions,
                        current_step: self.current_step.next_clamped(self.max_steps),
                        answers: self.answers.clone(),
                        max_steps: self.max_steps,
                    })
                }
            }
            (from, _) => Err(SurveyError::InvalidTransition { from, to: target }),
        }
    }

    fn at_last_step(&self) -> bool {
        self.current_step.value() >= self.max_steps
    }

    /// The view an action aims for from this state, used to report rejected
    /// transitions.
    fn target_view(&self, action: &SurveyAction) -> SurveyView {
        match action {
            SurveyAction::Start => SurveyView::Questions,
            SurveyAction::SubmitStep {
                with_feedback: true,
                ..
            } => SurveyView::Feedback,
            SurveyAction::SubmitStep { .. } => SurveyView::Questions,
            SurveyAction::Advance => {
                if self.at_last_step() {
                    SurveyView::End
                } else {
                    SurveyView::Questions
                }
            }
        }
    }
}
