//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the questionnaire domain.

mod answer;
mod errors;
mod ids;
mod state_machine;
mod step_order;
mod timestamp;

pub use answer::{AnswerMap, AnswerValue};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FieldId, QuestionKey, SessionId, StepKey};
pub use state_machine::StateMachine;
pub use step_order::StepOrder;
pub use timestamp::Timestamp;
