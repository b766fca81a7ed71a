//! StepOrder value object for 1-based step positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A 1-based position in the step sequence.
///
/// Catalog steps carry contiguous orders `1..=count`; the flow state clamps
/// advancement so an order never exceeds the catalog length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepOrder(u32);

impl StepOrder {
    /// The first step.
    pub const FIRST: Self = Self(1);

    /// Creates a StepOrder, returning error if zero.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::invalid_format(
                "step_order",
                "orders are 1-based, got 0",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the 1-based value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the 0-based index for sequence lookups.
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the successor, clamped to `max`.
    pub fn next_clamped(&self, max: u32) -> Self {
        Self(self.0.saturating_add(1).min(max.max(1)))
    }

    /// Returns true for the first step.
    pub fn is_first(&self) -> bool {
        self.0 == 1
    }
}

impl Default for StepOrder {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for StepOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_order_try_new_accepts_positive_values() {
        assert_eq!(StepOrder::try_new(1).unwrap().value(), 1);
        assert_eq!(StepOrder::try_new(6).unwrap().value(), 6);
    }

    #[test]
    fn step_order_try_new_rejects_zero() {
        let result = StepOrder::try_new(0);
        assert!(result.is_err());
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "step_order"),
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn step_order_index_is_zero_based() {
        assert_eq!(StepOrder::FIRST.index(), 0);
        assert_eq!(StepOrder::try_new(6).unwrap().index(), 5);
    }

    #[test]
    fn step_order_next_clamped_increments_below_max() {
        assert_eq!(StepOrder::FIRST.next_clamped(6).value(), 2);
    }

    #[test]
    fn step_order_next_clamped_stops_at_max() {
        let fifth = StepOrder::try_new(5).unwrap();
        assert_eq!(fifth.next_clamped(6).value(), 6);

        let last = StepOrder::try_new(6).unwrap();
        assert_eq!(last.next_clamped(6).value(), 6);
    }

    #[test]
    fn step_order_default_is_first() {
        assert_eq!(StepOrder::default(), StepOrder::FIRST);
        assert!(StepOrder::default().is_first());
    }

    #[test]
    fn step_order_ordering_works() {
        let second = StepOrder::try_new(2).unwrap();
        let fourth = StepOrder::try_new(4).unwrap();
        assert!(second < fourth);
        assert!(fourth > second);
    }

    #[test]
    fn step_order_serializes_to_json() {
        let order = StepOrder::try_new(3).unwrap();
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn step_order_deserializes_from_json() {
        let order: StepOrder = serde_json::from_str("4").unwrap();
        assert_eq!(order.value(), 4);
    }

    #[test]
    fn step_order_displays_plain_value() {
        assert_eq!(format!("{}", StepOrder::try_new(2).unwrap()), "2");
    }
}
