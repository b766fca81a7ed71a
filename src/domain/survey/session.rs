//! SurveySession aggregate - The root entity for one respondent's run.
//!
//! A session owns the flow state and the live step form, applies actions to
//! move the run along, and records domain events for hosts that want to
//! observe the run.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::domain::catalog::{InputKind, Question, Step, StepCatalog};
use crate::domain::foundation::{
    AnswerMap, AnswerValue, DomainError, ErrorCode, QuestionKey, SessionId, Timestamp,
};

use super::{
    FlowState, SessionEvent, StepForm, SurveyAction, SurveyError, SurveyProgress, SurveyView,
    VisibilityResolver,
};

/// The SurveySession aggregate root.
///
/// Wraps the pure flow state with form lifecycle management: entering a step
/// seeds the form, submitting validates and merges the form's values, and
/// every accepted action leaves an event in the buffer.
#[derive(Debug, Clone)]
pub struct SurveySession {
    id: SessionId,
    catalog: Arc<StepCatalog>,
    state: FlowState,
    form: StepForm,
    created_at: Timestamp,
    updated_at: Timestamp,
    domain_events: Vec<SessionEvent>,
}

impl SurveySession {
    /// Creates a session over a catalog, sitting on the intro screen.
    pub fn new(catalog: Arc<StepCatalog>) -> Self {
        let now = Timestamp::now();
        let state = FlowState::new(&catalog);

        Self {
            id: SessionId::new(),
            catalog,
            state,
            form: StepForm::default(),
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the catalog the run walks through.
    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Returns the current flow state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Returns the live form for the step on screen.
    pub fn form(&self) -> &StepForm {
        &self.form
    }

    /// Returns the step currently on screen.
    pub fn current_step(&self) -> Result<&Step, SurveyError> {
        Ok(self.catalog.step(self.state.current_step())?)
    }

    /// Returns the current step's questions that are visible against the
    /// live form values.
    pub fn visible_questions(&self) -> Result<Vec<&Question>, SurveyError> {
        let step = self.catalog.step(self.state.current_step())?;
        Ok(VisibilityResolver::visible_questions(step, self.form.values()))
    }

    /// Returns a progress snapshot for stepper rendering.
    pub fn progress(&self) -> SurveyProgress {
        SurveyProgress::from_state(&self.state)
    }

    /// Returns the accumulated response record.
    pub fn response(&self) -> &AnswerMap {
        self.state.answers()
    }

    /// Renders the response record as a flat JSON object.
    pub fn response_json(&self) -> JsonValue {
        self.state.answers().to_json_value()
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the session last changed.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Run transitions
    // ───────────────────────────────────────────────────────────────

    /// Leaves the intro screen and enters the first step.
    pub fn start(&mut self) -> Result<(), SurveyError> {
        self.state = self.state.apply(SurveyAction::Start, &self.catalog)?;
        self.record_event(SessionEvent::Started {
            session_id: self.id,
            occurred_at: Timestamp::now(),
        });
        self.enter_current_step()?;
        self.touch();
        Ok(())
    }

    /// Writes a live answer for a question on the current step.
    ///
    /// Choice answers run the clearing cascade so dependent questions lose
    /// their values the moment their condition stops holding. Edits are only
    /// accepted while a questions screen is up.
    pub fn set_answer(
        &mut self,
        question_key: &QuestionKey,
        value: AnswerValue,
    ) -> Result<(), SurveyError> {
        if !self.state.view().accepts_edits() {
            return Err(SurveyError::InvalidTransition {
                from: self.state.view(),
                to: SurveyView::Questions,
            });
        }

        let step = self.catalog.step(self.state.current_step())?;
        let question = step.question(question_key).ok_or_else(|| {
            DomainError::new(
                ErrorCode::QuestionNotFound,
                format!(
                    "Step '{}' has no question '{}'",
                    step.key(),
                    question_key
                ),
            )
            .with_detail("step_key", step.key().as_str())
            .with_detail("question_key", question_key.as_str())
        })?;

        let field = question.field_id(step.key());
        match question.kind() {
            InputKind::ButtonChoice => self.form.change_choice(step, field, value),
            _ => self.form.set(field, value),
        }

        self.touch();
        Ok(())
    }

    /// Submits the current step's form.
    ///
    /// On success the answers are merged into the response record and the run
    /// moves to the step's feedback passage (`with_feedback`) or straight to
    /// the next step. On validation failure nothing changes and the failure
    /// lists every offending field.
    pub fn submit_step(&mut self, with_feedback: bool) -> Result<(), SurveyError> {
        let submitted = self.state.current_step();
        let step_key = self.catalog.step(submitted)?.key().clone();

        self.state = self.state.apply(
            SurveyAction::SubmitStep {
                answers: self.form.values().clone(),
                with_feedback,
            },
            &self.catalog,
        )?;

        self.record_event(SessionEvent::StepSubmitted {
            session_id: self.id,
            step: submitted,
            step_key,
            occurred_at: Timestamp::now(),
        });

        if with_feedback {
            self.record_event(SessionEvent::FeedbackEntered {
                session_id: self.id,
                step: submitted,
                occurred_at: Timestamp::now(),
            });
        } else {
            self.enter_current_step()?;
        }

        self.touch();
        Ok(())
    }

    /// Leaves the feedback screen, entering the next step or ending the run.
    pub fn advance(&mut self) -> Result<(), SurveyError> {
        self.state = self.state.apply(SurveyAction::Advance, &self.catalog)?;

        if self.state.is_complete() {
            self.record_event(SessionEvent::Completed {
                session_id: self.id,
                occurred_at: Timestamp::now(),
            });
        } else {
            self.enter_current_step()?;
        }

        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    /// Seeds the form for the step now on screen and records its entry.
    fn enter_current_step(&mut self) -> Result<(), SurveyError> {
        let order = self.state.current_step();
        let step = self.catalog.step(order)?;
        self.form = StepForm::seed(step, self.state.answers());
        self.record_event(SessionEvent::StepEntered {
            session_id: self.id,
            step: order,
            occurred_at: Timestamp::now(),
        });
        Ok(())
    }

    fn record_event(&mut self, event: SessionEvent) {
        self.domain_events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{
        ButtonChoiceConfig, ChoiceOption, FeedbackPassage, NumericInputConfig, Question,
        QuestionInput, SliderConfig, Step, VisibilityCondition,
    };
    use crate::domain::foundation::{FieldId, StepKey, StepOrder};

    fn field(id: &str) -> FieldId {
        FieldId::new(id).unwrap()
    }

    fn key(k: &str) -> QuestionKey {
        QuestionKey::new(k).unwrap()
    }

    fn test_catalog() -> Arc<StepCatalog> {
        let children = Step::new(
            StepOrder::try_new(1).unwrap(),
            StepKey::new("hijes").unwrap(),
            vec![
                Question::new(
                    key("tenes"),
                    QuestionInput::ButtonChoice(ButtonChoiceConfig::new(
                        "¿Tenés hijes?",
                        vec![ChoiceOption::new("Sí", "1"), ChoiceOption::new("No", "0")],
                    )),
                ),
                Question::new(
                    key("volveria"),
                    QuestionInput::Slider(SliderConfig::new(
                        "¿Volverías a tenerlos?",
                        "Seguro que no",
                        "Seguro que sí",
                    )),
                )
                .with_condition(VisibilityCondition::answer_equals(field("hijes-tenes"), "1")),
            ],
            FeedbackPassage::new("“...nacer...”", "Libro de la vida"),
        )
        .unwrap();

        let age = Step::new(
            StepOrder::try_new(2).unwrap(),
            StepKey::new("edad").unwrap(),
            vec![Question::new(
                key("actual"),
                QuestionInput::NumericInput(NumericInputConfig::new("¿Qué edad tenés?").with_min(0)),
            )],
            FeedbackPassage::new("“...límite...”", "Libro de la vida"),
        )
        .unwrap();

        Arc::new(StepCatalog::new(vec![children, age]).unwrap())
    }

    fn started_session() -> SurveySession {
        let mut session = SurveySession::new(test_catalog());
        session.start().unwrap();
        session
    }

    #[test]
    fn new_session_sits_on_the_intro() {
        let session = SurveySession::new(test_catalog());

        assert_eq!(session.state().view(), SurveyView::Intro);
        assert!(session.response().is_empty());
        assert!(session.form().values().is_empty());
    }

    #[test]
    fn sessions_get_unique_ids() {
        let a = SurveySession::new(test_catalog());
        let b = SurveySession::new(test_catalog());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn start_enters_the_first_step_and_records_events() {
        let mut session = SurveySession::new(test_catalog());
        session.start().unwrap();

        assert_eq!(session.state().view(), SurveyView::Questions);
        assert_eq!(session.current_step().unwrap().key().as_str(), "hijes");

        let events = session.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SessionEvent::Started { .. }));
        assert!(matches!(events[1], SessionEvent::StepEntered { .. }));
    }

    #[test]
    fn set_answer_runs_the_cascade_for_choices() {
        let mut session = started_session();
        session
            .set_answer(&key("tenes"), AnswerValue::text("1"))
            .unwrap();
        session
            .set_answer(&key("volveria"), AnswerValue::number(80))
            .unwrap();

        session
            .set_answer(&key("tenes"), AnswerValue::text("0"))
            .unwrap();

        assert_eq!(session.form().get(&field("hijes-volveria")), None);
        assert_eq!(
            session.form().get(&field("hijes-tenes")),
            Some(&AnswerValue::text("0"))
        );
    }

    #[test]
    fn set_answer_rejects_unknown_questions() {
        let mut session = started_session();

        let err = session
            .set_answer(&key("inventada"), AnswerValue::text("1"))
            .unwrap_err();

        assert!(matches!(err, SurveyError::Catalog(_)));
    }

    #[test]
    fn set_answer_is_rejected_before_the_run_starts() {
        let mut session = SurveySession::new(test_catalog());

        let err = session
            .set_answer(&key("tenes"), AnswerValue::text("1"))
            .unwrap_err();

        assert!(matches!(
            err,
            SurveyError::InvalidTransition {
                from: SurveyView::Intro,
                to: SurveyView::Questions,
            }
        ));
    }

    #[test]
    fn visible_questions_track_the_live_form() {
        let mut session = started_session();
        assert_eq!(session.visible_questions().unwrap().len(), 1);

        session
            .set_answer(&key("tenes"), AnswerValue::text("1"))
            .unwrap();

        let keys: Vec<&str> = session
            .visible_questions()
            .unwrap()
            .iter()
            .map(|q| q.key().as_str())
            .collect();
        assert_eq!(keys, vec!["tenes", "volveria"]);
    }

    #[test]
    fn submit_without_feedback_enters_the_next_step() {
        let mut session = started_session();
        session
            .set_answer(&key("tenes"), AnswerValue::text("0"))
            .unwrap();

        session.submit_step(false).unwrap();

        assert_eq!(session.state().view(), SurveyView::Questions);
        assert_eq!(session.current_step().unwrap().key().as_str(), "edad");
        assert_eq!(
            session.response().get(&field("hijes-tenes")),
            Some(&AnswerValue::text("0"))
        );
        // The next step's form carries prior answers but none of its own.
        assert_eq!(
            session.form().get(&field("hijes-tenes")),
            Some(&AnswerValue::text("0"))
        );
        assert_eq!(session.form().get(&field("edad-actual")), None);
    }

    #[test]
    fn submit_with_feedback_shows_the_passage_first() {
        let mut session = started_session();
        session
            .set_answer(&key("tenes"), AnswerValue::text("0"))
            .unwrap();

        session.submit_step(true).unwrap();

        assert_eq!(session.state().view(), SurveyView::Feedback);
        let step = session.current_step().unwrap();
        assert_eq!(step.key().as_str(), "hijes");
        assert_eq!(step.feedback().secondary_text, "Libro de la vida");

        let events = session.take_events();
        assert!(matches!(
            events.last(),
            Some(SessionEvent::FeedbackEntered { .. })
        ));
    }

    #[test]
    fn invalid_submit_changes_nothing() {
        let mut session = started_session();
        session.take_events();

        let err = session.submit_step(false).unwrap_err();

        assert!(err.validation_failure().is_some());
        assert_eq!(session.state().view(), SurveyView::Questions);
        assert_eq!(session.current_step().unwrap().key().as_str(), "hijes");
        assert!(session.response().is_empty());
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn advance_after_feedback_enters_the_next_step() {
        let mut session = started_session();
        session
            .set_answer(&key("tenes"), AnswerValue::text("0"))
            .unwrap();
        session.submit_step(true).unwrap();

        session.advance().unwrap();

        assert_eq!(session.state().view(), SurveyView::Questions);
        assert_eq!(session.current_step().unwrap().key().as_str(), "edad");
    }

    #[test]
    fn full_run_reaches_the_end_with_events_in_order() {
        let mut session = started_session();
        session
            .set_answer(&key("tenes"), AnswerValue::text("0"))
            .unwrap();
        session.submit_step(false).unwrap();
        session
            .set_answer(&key("actual"), AnswerValue::text("30"))
            .unwrap();
        session.submit_step(true).unwrap();
        session.advance().unwrap();

        assert!(session.state().is_complete());
        assert_eq!(session.progress().completion_percent(), 100);

        let kinds: Vec<&str> = session
            .take_events()
            .iter()
            .map(|event| match event {
                SessionEvent::Started { .. } => "started",
                SessionEvent::StepEntered { .. } => "step_entered",
                SessionEvent::StepSubmitted { .. } => "step_submitted",
                SessionEvent::FeedbackEntered { .. } => "feedback_entered",
                SessionEvent::Completed { .. } => "completed",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "started",
                "step_entered",
                "step_submitted",
                "step_entered",
                "step_submitted",
                "feedback_entered",
                "completed",
            ]
        );
    }

    #[test]
    fn response_json_renders_a_flat_object() {
        let mut session = started_session();
        session
            .set_answer(&key("tenes"), AnswerValue::text("0"))
            .unwrap();
        session.submit_step(false).unwrap();

        let json = session.response_json();
        assert_eq!(json["hijes-tenes"], serde_json::json!("0"));
    }

    #[test]
    fn take_events_clears_the_buffer() {
        let mut session = started_session();

        assert!(!session.take_events().is_empty());
        assert!(session.take_events().is_empty());
    }
}
