//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state transitions
//! across the wizard stages and per-competency suggestion requests.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// let stage = WizardStage::Profiling.transition_to(WizardStage::Designing)?;
/// ```
pub trait StateMachine: Sized + Clone + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns true if no outgoing transition exists.
    fn is_terminal(&self) -> bool;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
