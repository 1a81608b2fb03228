//! Design handlers - objective suggestions.

mod suggest_objective;

pub use suggest_objective::{SuggestObjectiveCommand, SuggestObjectiveHandler};
