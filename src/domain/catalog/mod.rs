//! Catalog module - Questionnaire step definitions.
//!
//! A catalog is the ordered list of steps a respondent walks through. Each
//! step carries its questions, their input configurations, any visibility
//! conditions, and the book passage shown once the step is submitted.
//! Catalogs can be built in code, loaded from YAML, or taken from the
//! built-in published content.

mod catalog;
mod condition;
mod content;
mod question;
mod step;

pub use catalog::StepCatalog;
pub use condition::VisibilityCondition;
pub use content::default_catalog;
pub use question::{
    ButtonChoiceConfig, CheckboxConfig, ChoiceDirection, ChoiceOption, InputKind,
    NumericInputConfig, Question, QuestionInput, SliderConfig,
};
pub use step::{FeedbackPassage, Step};
