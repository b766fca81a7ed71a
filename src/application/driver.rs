//! SurveyDriver - Application entry point for driving a questionnaire run.
//!
//! Thin dispatch layer over the `SurveySession` aggregate. Every action that
//! reaches the domain is traced: `debug!` when the session accepts it,
//! `warn!` when it rejects it. The domain layer itself stays log-free, so
//! hosts that want instrumented runs go through the driver.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::domain::catalog::{Question, Step, StepCatalog};
use crate::domain::foundation::{AnswerValue, QuestionKey, SessionId};
use crate::domain::survey::{
    SessionEvent, SurveyError, SurveyProgress, SurveySession, SurveyView,
};

/// Drives one respondent's run from the intro screen to the end screen.
///
/// Owns the session; callers dispatch actions through the driver's methods
/// and read the state back through its accessors.
pub struct SurveyDriver {
    session: SurveySession,
}

impl SurveyDriver {
    /// Opens a new run over a catalog, sitting on the intro screen.
    pub fn new(catalog: Arc<StepCatalog>) -> Self {
        let session = SurveySession::new(catalog);
        debug!(
            session_id = %session.id(),
            steps = session.catalog().count(),
            "Opened survey session"
        );
        Self { session }
    }

    /// Wraps an existing session, e.g. one rebuilt by a host.
    pub fn with_session(session: SurveySession) -> Self {
        Self { session }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the underlying session.
    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.session.id()
    }

    /// Returns the screen currently shown.
    pub fn view(&self) -> SurveyView {
        self.session.state().view()
    }

    /// Returns the step currently on screen.
    pub fn current_step(&self) -> Result<&Step, SurveyError> {
        self.session.current_step()
    }

    /// Returns the current step's questions visible against the live form.
    pub fn visible_questions(&self) -> Result<Vec<&Question>, SurveyError> {
        self.session.visible_questions()
    }

    /// Returns a progress snapshot for stepper rendering.
    pub fn progress(&self) -> SurveyProgress {
        self.session.progress()
    }

    /// Renders the accumulated response record as a flat JSON object.
    pub fn response_json(&self) -> JsonValue {
        self.session.response_json()
    }

    /// Takes the session's accumulated domain events.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        self.session.take_events()
    }

    /// Consumes the driver, handing the session back.
    pub fn into_session(self) -> SurveySession {
        self.session
    }

    // ───────────────────────────────────────────────────────────────
    // Action dispatch
    // ───────────────────────────────────────────────────────────────

    /// Leaves the intro screen and enters the first step.
    pub fn start(&mut self) -> Result<(), SurveyError> {
        match self.session.start() {
            Ok(()) => {
                debug!(
                    session_id = %self.session.id(),
                    step = %self.session.state().current_step(),
                    "Survey run started"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    session_id = %self.session.id(),
                    code = %err.code(),
                    error = %err,
                    "Start action rejected"
                );
                Err(err)
            }
        }
    }

    /// Writes a live answer for a question on the current step.
    pub fn set_answer(
        &mut self,
        question_key: &QuestionKey,
        value: AnswerValue,
    ) -> Result<(), SurveyError> {
        match self.session.set_answer(question_key, value) {
            Ok(()) => {
                debug!(
                    session_id = %self.session.id(),
                    question = %question_key,
                    "Answer recorded"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    session_id = %self.session.id(),
                    question = %question_key,
                    code = %err.code(),
                    error = %err,
                    "Answer rejected"
                );
                Err(err)
            }
        }
    }

    /// Submits the current step's form.
    pub fn submit_step(&mut self, with_feedback: bool) -> Result<(), SurveyError> {
        let step = self.session.state().current_step();
        match self.session.submit_step(with_feedback) {
            Ok(()) => {
                debug!(
                    session_id = %self.session.id(),
                    step = %step,
                    view = %self.session.state().view(),
                    "Step submitted"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    session_id = %self.session.id(),
                    step = %step,
                    code = %err.code(),
                    error = %err,
                    "Step submission rejected"
                );
                Err(err)
            }
        }
    }

    /// Leaves the feedback screen, entering the next step or ending the run.
    pub fn advance(&mut self) -> Result<(), SurveyError> {
        match self.session.advance() {
            Ok(()) => {
                debug!(
                    session_id = %self.session.id(),
                    view = %self.session.state().view(),
                    "Advanced past feedback"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    session_id = %self.session.id(),
                    code = %err.code(),
                    error = %err,
                    "Advance action rejected"
                );
                Err(err)
            }
        }
    }
}
