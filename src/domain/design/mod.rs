//! Design module - stage two of the wizard.
//!
//! Maps the prioritised competencies onto learning objectives and the two
//! checklist catalogs, and tracks objective suggestions per competency.

mod checklist;
mod learning_design;
mod prompt;
mod suggestion;

pub use checklist::{ChecklistCategory, ChecklistKind, ALE_FEATURES, SKIVE_APPROACHES};
pub use learning_design::LearningDesign;
pub use prompt::ObjectivePrompt;
pub use suggestion::{SuggestionState, SuggestionTracker};
