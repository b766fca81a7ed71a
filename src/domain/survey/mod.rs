//! Survey module - Flow state machine and session lifecycle.
//!
//! The run itself: a pure `(state, action) -> state` transition function over
//! the four survey views, wrapped by the `SurveySession` aggregate which
//! manages the live step form, visibility, and domain events.
//!
//! # Events
//!
//! - `Started` - Recorded when the respondent leaves the intro
//! - `StepEntered` - Recorded whenever a step's form is seeded
//! - `StepSubmitted` - Recorded when a step's answers pass validation
//! - `FeedbackEntered` - Recorded when a book passage comes on screen
//! - `Completed` - Recorded when the run reaches the end screen

mod action;
mod errors;
mod events;
mod form;
mod progress;
mod session;
mod state;
mod view;
mod visibility;

pub use action::SurveyAction;
pub use errors::SurveyError;
pub use events::SessionEvent;
pub use form::StepForm;
pub use progress::SurveyProgress;
pub use session::SurveySession;
pub use state::FlowState;
pub use view::SurveyView;
pub use visibility::VisibilityResolver;
