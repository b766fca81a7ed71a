//! StepCatalog - the ordered, immutable sequence of step definitions.
//!
//! The catalog is built once from a static definition table (or a YAML
//! document) and validated at construction: orders are exactly `1..=count`
//! with no gaps or duplicates, and step keys are unique. After that it is
//! read-only; every flow-state transition resolves its current step here.

use serde::{Deserialize, Serialize};
use serde_yaml::with::singleton_map_recursive;

use crate::domain::foundation::{DomainError, ErrorCode, StepKey, StepOrder};

use super::Step;

/// Ordered, immutable list of step definitions, loaded once at start.
///
/// Steps are stored sorted by order, so lookup by [`StepOrder`] is a direct
/// index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepCatalog {
    steps: Vec<Step>,
}

/// Top-level document shape for YAML catalogs.
#[derive(Deserialize)]
struct CatalogDoc {
    steps: Vec<Step>,
}

impl StepCatalog {
    /// Builds a catalog, validating the structural invariants.
    ///
    /// Steps may arrive in any order; they are stored sorted.
    pub fn new(mut steps: Vec<Step>) -> Result<Self, DomainError> {
        if steps.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyCatalog,
                "Catalog must contain at least one step",
            ));
        }

        for step in &steps {
            step.validate()?;
        }

        for (index, step) in steps.iter().enumerate() {
            let order_taken = steps[..index]
                .iter()
                .any(|earlier| earlier.order() == step.order());
            if order_taken {
                return Err(DomainError::new(
                    ErrorCode::DuplicateStepOrder,
                    format!("Step order {} is declared more than once", step.order()),
                )
                .with_detail("order", step.order().to_string()));
            }

            let key_taken = steps[..index]
                .iter()
                .any(|earlier| earlier.key() == step.key());
            if key_taken {
                return Err(DomainError::new(
                    ErrorCode::DuplicateKey,
                    format!("Step key '{}' is declared more than once", step.key()),
                )
                .with_detail("step_key", step.key().as_str()));
            }
        }

        steps.sort_by_key(|step| step.order());

        for (index, step) in steps.iter().enumerate() {
            let expected = (index + 1) as u32;
            if step.order().value() != expected {
                return Err(DomainError::new(
                    ErrorCode::NonContiguousStepOrder,
                    format!(
                        "Step orders must be contiguous from 1; expected {}, found {}",
                        expected,
                        step.order()
                    ),
                )
                .with_detail("expected", expected.to_string())
                .with_detail("found", step.order().to_string()));
            }
        }

        Ok(Self { steps })
    }

    /// Parses and validates a catalog from a YAML document.
    ///
    /// The document carries a top-level `steps` list. Question inputs and
    /// visibility conditions are written as single-entry maps (`slider:`,
    /// `answer_equals:`), not YAML tags.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let doc: CatalogDoc =
            singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(yaml))
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::InvalidFormat,
                        format!("Catalog YAML is invalid: {}", e),
                    )
                })?;
        Self::new(doc.steps)
    }

    /// Serializes the catalog to the document shape `from_yaml_str` reads.
    pub fn to_yaml_string(&self) -> Result<String, DomainError> {
        let mut out = Vec::new();
        {
            let mut ser = serde_yaml::Serializer::new(&mut out);
            singleton_map_recursive::serialize(self, &mut ser).map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Catalog serialization failed: {}", e),
                )
            })?;
        }
        String::from_utf8(out).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Catalog serialization failed: {}", e),
            )
        })
    }

    /// Returns the step at a 1-based order.
    ///
    /// Fails with `STEP_NOT_FOUND` outside `[1, count]`; given the flow-state
    /// invariant this indicates a caller bug, not a user error.
    pub fn step(&self, order: StepOrder) -> Result<&Step, DomainError> {
        self.steps.get(order.index()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::StepNotFound,
                format!("Step {} not found; catalog has {} steps", order, self.count()),
            )
            .with_detail("requested", order.to_string())
            .with_detail("count", self.count().to_string())
        })
    }

    /// Looks up a step by key.
    pub fn step_by_key(&self, key: &StepKey) -> Option<&Step> {
        self.steps.iter().find(|step| step.key() == key)
    }

    /// Returns the number of steps.
    pub fn count(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
