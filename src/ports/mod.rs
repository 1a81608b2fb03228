//! Ports - interfaces the application depends on.
//!
//! - `ProfileApi` - list/load/save profiles and the master KRA list
//! - `ObjectiveSuggester` - AI text suggestions for learning objectives

mod objective_suggester;
mod profile_api;

pub use objective_suggester::{ObjectiveSuggester, SuggestionError};
pub use profile_api::{ApiError, ProfileApi, ProfileSummary, SaveReceipt};
