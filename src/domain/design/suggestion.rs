//! Per-competency objective suggestion state.
//!
//! Each competency has its own small state machine. A pending suggestion
//! blocks another request for the same competency only.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::rating::CompetencyId;

/// Request state for one competency's suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SuggestionState {
    #[default]
    Idle,
    Pending,
    Done,
    Failed(String),
}

impl SuggestionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SuggestionState::Pending)
    }

    /// Failure reason shown next to the competency's objective box.
    pub fn error(&self) -> Option<&str> {
        match self {
            SuggestionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl StateMachine for SuggestionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SuggestionState::*;
        match (self, target) {
            (Pending, Done) | (Pending, Failed(_)) => true,
            (Pending, _) => false,
            (_, Pending) => true,
            _ => false,
        }
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

/// Suggestion states keyed by competency.
#[derive(Debug, Clone, Default)]
pub struct SuggestionTracker {
    states: HashMap<CompetencyId, SuggestionState>,
}

impl SuggestionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &CompetencyId) -> SuggestionState {
        self.states.get(id).cloned().unwrap_or_default()
    }

    pub fn is_pending(&self, id: &CompetencyId) -> bool {
        self.states.get(id).is_some_and(SuggestionState::is_pending)
    }

    pub fn pending_count(&self) -> usize {
        self.states.values().filter(|s| s.is_pending()).count()
    }

    /// Marks `id` as in flight.
    ///
    /// # Errors
    ///
    /// Fails when a suggestion for `id` is already pending.
    pub fn begin(&mut self, id: &CompetencyId) -> Result<(), ValidationError> {
        self.advance(id, SuggestionState::Pending)
    }

    pub fn succeed(&mut self, id: &CompetencyId) -> Result<(), ValidationError> {
        self.advance(id, SuggestionState::Done)
    }

    pub fn fail(&mut self, id: &CompetencyId, reason: impl Into<String>) -> Result<(), ValidationError> {
        self.advance(id, SuggestionState::Failed(reason.into()))
    }

    fn advance(&mut self, id: &CompetencyId, target: SuggestionState) -> Result<(), ValidationError> {
        let next = self.state(id).transition_to(target)?;
        self.states.insert(id.clone(), next);
        Ok(())
    }
}
