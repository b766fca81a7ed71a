//! SurveyProgress value object - Progress snapshot for a survey run.
//!
//! A read-only snapshot computed from the flow state, for stepper rendering.
//! Holds no state of its own.

use super::{FlowState, SurveyView};

/// How far a run has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyProgress {
    current_step: u32,
    total_steps: u32,
    view: SurveyView,
}

impl SurveyProgress {
    /// Derives the snapshot from a flow state.
    pub fn from_state(state: &FlowState) -> Self {
        Self {
            current_step: state.current_step().value(),
            total_steps: state.max_steps(),
            view: state.view(),
        }
    }

    /// The 1-based step on screen (or last shown, after the run ends).
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Total number of steps in the run.
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// The screen the run is on.
    pub fn view(&self) -> SurveyView {
        self.view
    }

    /// Number of steps already submitted.
    ///
    /// A step counts once its answers are in: on the feedback screen the
    /// current step is done, on a questions screen it is not yet.
    pub fn completed_steps(&self) -> u32 {
        match self.view {
            SurveyView::Intro => 0,
            SurveyView::Questions => self.current_step - 1,
            SurveyView::Feedback => self.current_step,
            SurveyView::End => self.total_steps,
        }
    }

    /// Completion percentage (0-100).
    pub fn completion_percent(&self) -> u8 {
        ((self.completed_steps() * 100) / self.total_steps) as u8
    }

    /// True once the run has reached the end screen.
    pub fn is_complete(&self) -> bool {
        self.view == SurveyView::End
    }
}
