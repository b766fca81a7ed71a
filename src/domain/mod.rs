//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Questionnaire step definitions and built-in content
//! - `validation` - Per-step answer validation rules
//! - `survey` - Flow state machine and session lifecycle

pub mod catalog;
pub mod foundation;
pub mod survey;
pub mod validation;
