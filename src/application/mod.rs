//! Application layer - The instrumented entry point for hosts.
//!
//! This layer wraps the domain's session aggregate with tracing so a host
//! embedding the questionnaire gets logged action dispatch without the
//! domain layer knowing about logging at all.

pub mod driver;

pub use driver::SurveyDriver;
