//! Paso - Multi-step questionnaire flow engine
//!
//! This crate implements the state, validation, and content model behind a
//! stepped questionnaire: a step catalog with conditional questions, per-step
//! validation rules, a response accumulator, and the intro/questions/feedback
//! flow state machine that drives a run from start to end.

pub mod application;
pub mod domain;
