//! Question definitions and their kind-specific input configurations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AnswerMap, FieldId, QuestionKey, StepKey};

use super::VisibilityCondition;

/// The four input kinds a question can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Slider,
    ButtonChoice,
    Checkbox,
    NumericInput,
}

impl InputKind {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            InputKind::Slider => "Slider",
            InputKind::ButtonChoice => "Button Choice",
            InputKind::Checkbox => "Checkbox",
            InputKind::NumericInput => "Numeric Input",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One selectable option for button and checkbox inputs.
///
/// `text` is what the respondent sees, `value` what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    pub value: String,
}

impl ChoiceOption {
    /// Creates a choice option.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Layout hint for button-choice options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceDirection {
    Horizontal,
    Vertical,
}

/// Slider input configuration. Bounds default to the 0..=100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub label: String,
    pub min_label: String,
    pub max_label: String,
    #[serde(default = "SliderConfig::default_min")]
    pub min: i64,
    #[serde(default = "SliderConfig::default_max")]
    pub max: i64,
    #[serde(default)]
    pub default: Option<i64>,
}

impl SliderConfig {
    /// Default lower bound.
    pub const MIN: i64 = 0;

    /// Default upper bound.
    pub const MAX: i64 = 100;

    fn default_min() -> i64 {
        Self::MIN
    }

    fn default_max() -> i64 {
        Self::MAX
    }

    /// Creates a slider on the default 0..=100 scale.
    pub fn new(
        label: impl Into<String>,
        min_label: impl Into<String>,
        max_label: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            min_label: min_label.into(),
            max_label: max_label.into(),
            min: Self::MIN,
            max: Self::MAX,
            default: None,
        }
    }

    /// Replaces the default bounds.
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the initial thumb position.
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }
}

/// Button-choice input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonChoiceConfig {
    pub label: String,
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub direction: Option<ChoiceDirection>,
}

impl ButtonChoiceConfig {
    /// Creates a button-choice input.
    pub fn new(label: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self {
            label: label.into(),
            options,
            direction: None,
        }
    }

    /// Sets the layout hint.
    pub fn with_direction(mut self, direction: ChoiceDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Returns the permitted stored values, in option order.
    pub fn option_values(&self) -> Vec<String> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }
}

/// Checkbox input configuration (optional multi-select).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxConfig {
    pub label: String,
    pub options: Vec<ChoiceOption>,
}

impl CheckboxConfig {
    /// Creates a checkbox input.
    pub fn new(label: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// Numeric input configuration. Absent bounds are unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericInputConfig {
    pub label: String,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

impl NumericInputConfig {
    /// Creates an unbounded numeric input.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            min: None,
            max: None,
        }
    }

    /// Sets the lower bound.
    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Kind-specific input definition for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionInput {
    Slider(SliderConfig),
    ButtonChoice(ButtonChoiceConfig),
    Checkbox(CheckboxConfig),
    NumericInput(NumericInputConfig),
}

impl QuestionInput {
    /// Returns the input kind.
    pub fn kind(&self) -> InputKind {
        match self {
            QuestionInput::Slider(_) => InputKind::Slider,
            QuestionInput::ButtonChoice(_) => InputKind::ButtonChoice,
            QuestionInput::Checkbox(_) => InputKind::Checkbox,
            QuestionInput::NumericInput(_) => InputKind::NumericInput,
        }
    }

    /// Returns the prompt label shown to the respondent.
    pub fn label(&self) -> &str {
        match self {
            QuestionInput::Slider(config) => &config.label,
            QuestionInput::ButtonChoice(config) => &config.label,
            QuestionInput::Checkbox(config) => &config.label,
            QuestionInput::NumericInput(config) => &config.label,
        }
    }
}

/// A single input prompt within a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    key: QuestionKey,
    input: QuestionInput,
    #[serde(default)]
    condition: Option<VisibilityCondition>,
}

impl Question {
    /// Creates an unconditional question.
    pub fn new(key: QuestionKey, input: QuestionInput) -> Self {
        Self {
            key,
            input,
            condition: None,
        }
    }

    /// Attaches a visibility condition.
    pub fn with_condition(mut self, condition: VisibilityCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Returns the question key.
    pub fn key(&self) -> &QuestionKey {
        &self.key
    }

    /// Returns the input definition.
    pub fn input(&self) -> &QuestionInput {
        &self.input
    }

    /// Returns the input kind.
    pub fn kind(&self) -> InputKind {
        self.input.kind()
    }

    /// Returns the visibility condition, if any.
    pub fn condition(&self) -> Option<&VisibilityCondition> {
        self.condition.as_ref()
    }

    /// Composes this question's global field identifier within a step.
    pub fn field_id(&self, step: &StepKey) -> FieldId {
        FieldId::compose(step, &self.key)
    }

    /// Returns true when the question is active for the given answers.
    ///
    /// Unconditional questions are always active.
    pub fn is_visible(&self, answers: &AnswerMap) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition.evaluate(answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AnswerValue;

    fn question_key(key: &str) -> QuestionKey {
        QuestionKey::new(key).unwrap()
    }

    fn yes_no_options() -> Vec<ChoiceOption> {
        vec![ChoiceOption::new("Sí", "1"), ChoiceOption::new("No", "0")]
    }

    #[test]
    fn slider_config_defaults_to_percent_scale() {
        let config = SliderConfig::new("¿Coincide?", "Nada", "Totalmente");
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 100);
        assert_eq!(config.default, None);
    }

    #[test]
    fn slider_config_with_bounds_overrides_scale() {
        let config = SliderConfig::new("¿Semana?", "0", "42").with_bounds(0, 42);
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 42);
    }

    #[test]
    fn slider_config_deserializes_missing_bounds_as_defaults() {
        let yaml = "label: '¿Coincide?'\nmin_label: Nada\nmax_label: Totalmente\n";
        let config: SliderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 100);
    }

    #[test]
    fn button_choice_config_exposes_option_values() {
        let config = ButtonChoiceConfig::new("¿Tenés hijes?", yes_no_options());
        assert_eq!(config.option_values(), vec!["1", "0"]);
    }

    #[test]
    fn question_input_reports_kind_and_label() {
        let input = QuestionInput::NumericInput(NumericInputConfig::new("¿Cuál es tu edad?"));
        assert_eq!(input.kind(), InputKind::NumericInput);
        assert_eq!(input.label(), "¿Cuál es tu edad?");
    }

    #[test]
    fn question_field_id_is_namespaced_by_step() {
        let step = StepKey::new("hijes").unwrap();
        let question = Question::new(
            question_key("tenes"),
            QuestionInput::ButtonChoice(ButtonChoiceConfig::new("¿Tenés hijes?", yes_no_options())),
        );
        assert_eq!(question.field_id(&step).as_str(), "hijes-tenes");
    }

    #[test]
    fn unconditional_question_is_always_visible() {
        let question = Question::new(
            question_key("coincide"),
            QuestionInput::Slider(SliderConfig::new("¿Coincide?", "Nada", "Totalmente")),
        );
        assert!(question.is_visible(&AnswerMap::new()));
    }

    #[test]
    fn conditional_question_follows_its_condition() {
        let controlling = FieldId::new("hijes-tenes").unwrap();
        let question = Question::new(
            question_key("volveria"),
            QuestionInput::Slider(SliderConfig::new("¿Volverías a tenerlos?", "No", "Sí")),
        )
        .with_condition(VisibilityCondition::answer_equals(controlling.clone(), "1"));

        let mut answers = AnswerMap::new();
        assert!(!question.is_visible(&answers));

        answers.set(controlling, AnswerValue::text("1"));
        assert!(question.is_visible(&answers));
    }

    #[test]
    fn question_roundtrips_through_yaml() {
        let question = Question::new(
            question_key("tenes"),
            QuestionInput::ButtonChoice(
                ButtonChoiceConfig::new("¿Tenés hijes?", yes_no_options())
                    .with_direction(ChoiceDirection::Horizontal),
            ),
        );
        let yaml = serde_yaml::to_string(&question).unwrap();
        let parsed: Question = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(question, parsed);
    }

    #[test]
    fn input_kind_display_names_are_human_readable() {
        assert_eq!(InputKind::Slider.to_string(), "Slider");
        assert_eq!(InputKind::ButtonChoice.to_string(), "Button Choice");
        assert_eq!(InputKind::NumericInput.to_string(), "Numeric Input");
    }
}
