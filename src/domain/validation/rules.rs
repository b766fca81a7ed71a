//! Validation rules derived from a step's question list.
//!
//! Mirrors the published questionnaire's behavior: button choices must match a
//! stored option value, numeric inputs must parse as integers within their
//! bounds, and sliders must stay on their scale and are required unless an
//! unmet condition hides them. Checkbox questions carry no rule.

use std::collections::BTreeMap;

use crate::domain::catalog::{QuestionInput, Step, VisibilityCondition};
use crate::domain::foundation::{AnswerMap, FieldId};

use super::{FieldError, ValidationFailure, ValueConstraint};

/// Declarative validation rule for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Value must equal one of the permitted stored values. Always required.
    OneOf { permitted: Vec<String> },

    /// Value must parse as an integer within the bounds. Always required.
    /// Absent bounds are unchecked.
    IntegerInRange { min: Option<i64>, max: Option<i64> },

    /// Value must be a number on the scale. Required unless a condition hides
    /// the question at evaluation time; a present value is always checked.
    NumberInRange {
        min: i64,
        max: i64,
        required_when: Option<VisibilityCondition>,
    },
}

/// The compiled rule set for one step, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepRules {
    rules: BTreeMap<FieldId, FieldRule>,
}

impl StepRules {
    /// Builds the rule set for a step's questions.
    ///
    /// Checkbox questions are skipped: the published questionnaire never
    /// validated them, so they stay optional and unchecked.
    pub fn for_step(step: &Step) -> Self {
        let mut rules = BTreeMap::new();
        for question in step.questions() {
            let rule = match question.input() {
                QuestionInput::ButtonChoice(config) => FieldRule::OneOf {
                    permitted: config.option_values(),
                },
                QuestionInput::NumericInput(config) => FieldRule::IntegerInRange {
                    min: config.min,
                    max: config.max,
                },
                QuestionInput::Slider(config) => FieldRule::NumberInRange {
                    min: config.min,
                    max: config.max,
                    required_when: question.condition().cloned(),
                },
                QuestionInput::Checkbox(_) => continue,
            };
            rules.insert(question.field_id(step.key()), rule);
        }
        Self { rules }
    }

    /// Returns the rule for a field, if the step declares one.
    pub fn rule(&self, field: &FieldId) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Number of validated fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the step has nothing to validate.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks every rule against the answers, collecting all failures.
    ///
    /// Conditional requirements are evaluated against the full answer map, so
    /// answers carried over from earlier steps participate in conditions.
    pub fn evaluate(&self, answers: &AnswerMap) -> Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        for (field, rule) in &self.rules {
            if let Some(error) = check_rule(rule, field, answers) {
                failure.add(field.clone(), error);
            }
        }
        if failure.is_empty() {
            Ok(())
        } else {
            Err(failure)
        }
    }
}

fn check_rule(rule: &FieldRule, field: &FieldId, answers: &AnswerMap) -> Option<FieldError> {
    // Empty text and empty selections count as missing, matching how a form
    // seeds untouched fields.
    let value = answers.get(field).filter(|v| !v.is_empty());

    match rule {
        FieldRule::OneOf { permitted } => match value {
            None => Some(FieldError::RequiredFieldMissing),
            Some(v) if permitted.iter().any(|p| v.matches_choice(p)) => None,
            Some(_) => Some(FieldError::OutOfRange(ValueConstraint::OneOf {
                permitted: permitted.clone(),
            })),
        },
        FieldRule::IntegerInRange { min, max } => match value {
            None => Some(FieldError::RequiredFieldMissing),
            Some(v) => {
                let within = v.as_number().map_or(false, |n| {
                    min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi)
                });
                if within {
                    None
                } else {
                    Some(FieldError::OutOfRange(ValueConstraint::IntegerBounds {
                        min: *min,
                        max: *max,
                    }))
                }
            }
        },
        FieldRule::NumberInRange {
            min,
            max,
            required_when,
        } => {
            let required = required_when
                .as_ref()
                .map_or(true, |condition| condition.evaluate(answers));
            match value {
                None if required => Some(FieldError::RequiredFieldMissing),
                None => None,
                Some(v) => {
                    let within = v.as_number().map_or(false, |n| n >= *min && n <= *max);
                    if within {
                        None
                    } else {
                        Some(FieldError::OutOfRange(ValueConstraint::SliderRange {
                            min: *min,
                            max: *max,
                        }))
                    }
                }
            }
        }
    }
}
