//! Wizard - linear step cursor plus stage.
//!
//! `next` and `previous` clamp at the ends. `complete` is only offered on the
//! last step of a stage. Returning to profiling restarts at the first step
//! rather than resuming where the user left off.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

use super::{ProfilingStep, WizardStage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Wizard {
    stage: WizardStage,
    cursor: usize,
}

impl Wizard {
    /// Starts at the first profiling step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps in the current stage. Designing is one combined view.
    pub fn step_count(&self) -> usize {
        match self.stage {
            WizardStage::Profiling => ProfilingStep::ORDER.len(),
            WizardStage::Designing | WizardStage::Finished => 1,
        }
    }

    /// Current profiling step, `None` outside the profiling stage.
    pub fn current_step(&self) -> Option<ProfilingStep> {
        match self.stage {
            WizardStage::Profiling => ProfilingStep::ORDER.get(self.cursor).copied(),
            _ => None,
        }
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.step_count()
    }

    /// Progress through the current stage, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        let last = self.step_count().saturating_sub(1);
        if last == 0 {
            1.0
        } else {
            self.cursor as f64 / last as f64
        }
    }

    /// Moves one step forward, staying on the last step.
    pub fn next(&self) -> Self {
        Self {
            cursor: (self.cursor + 1).min(self.step_count() - 1),
            ..*self
        }
    }

    /// Moves one step back, staying on the first step.
    pub fn previous(&self) -> Self {
        Self {
            cursor: self.cursor.saturating_sub(1),
            ..*self
        }
    }

    /// True when the completion transition is available.
    pub fn can_complete(&self) -> bool {
        !self.stage.is_terminal() && self.is_last()
    }

    /// Leaves the current stage: profiling moves on to designing, designing
    /// finishes the flow.
    pub fn complete(&self) -> Result<Self, DomainError> {
        if !self.can_complete() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot complete {:?} from step {} of {}",
                    self.stage,
                    self.cursor + 1,
                    self.step_count()
                ),
            ));
        }
        let target = match self.stage {
            WizardStage::Profiling => WizardStage::Designing,
            _ => WizardStage::Finished,
        };
        self.enter(target)
    }

    /// Returns from designing to the first profiling step.
    pub fn back_to_profiling(&self) -> Result<Self, DomainError> {
        self.enter(WizardStage::Profiling)
    }

    fn enter(&self, target: WizardStage) -> Result<Self, DomainError> {
        let stage = self.stage.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })?;
        Ok(Self { stage, cursor: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_summary() -> Wizard {
        (0..6).fold(Wizard::new(), |w, _| w.next())
    }

    #[test]
    fn starts_on_role_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.stage(), WizardStage::Profiling);
        assert_eq!(wizard.cursor(), 0);
        assert_eq!(wizard.current_step(), Some(ProfilingStep::Role));
        assert_eq!(wizard.progress(), 0.0);
    }

    #[test]
    fn next_clamps_at_last_step() {
        let wizard = (0..20).fold(Wizard::new(), |w, _| w.next());
        assert_eq!(wizard.cursor(), 6);
        assert_eq!(wizard.current_step(), Some(ProfilingStep::Summary));
        assert_eq!(wizard.progress(), 1.0);
    }

    #[test]
    fn previous_clamps_at_zero() {
        let wizard = Wizard::new().previous().previous();
        assert_eq!(wizard.cursor(), 0);
        assert_eq!(at_summary().previous().current_step(), Some(ProfilingStep::Ethics));
    }

    #[test]
    fn complete_requires_last_step() {
        let err = Wizard::new().next().complete().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        assert!(!Wizard::new().can_complete());
        assert!(at_summary().can_complete());
    }

    #[test]
    fn complete_moves_to_designing() {
        let wizard = at_summary().complete().unwrap();
        assert_eq!(wizard.stage(), WizardStage::Designing);
        assert_eq!(wizard.current_step(), None);
        assert!(wizard.can_complete());
    }

    #[test]
    fn returning_to_profiling_resets_cursor() {
        let wizard = at_summary().complete().unwrap().back_to_profiling().unwrap();
        assert_eq!(wizard.stage(), WizardStage::Profiling);
        assert_eq!(wizard.cursor(), 0);
    }

    #[test]
    fn back_to_profiling_is_rejected_while_profiling() {
        assert!(Wizard::new().back_to_profiling().is_err());
    }

    #[test]
    fn completing_design_finishes_flow() {
        let wizard = at_summary().complete().unwrap().complete().unwrap();
        assert_eq!(wizard.stage(), WizardStage::Finished);
        assert!(!wizard.can_complete());
        assert!(wizard.complete().is_err());
        assert!(wizard.back_to_profiling().is_err());
    }

    #[test]
    fn next_and_previous_do_not_change_stage() {
        let designing = at_summary().complete().unwrap();
        assert_eq!(designing.next(), designing);
        assert_eq!(designing.previous(), designing);
    }
}
