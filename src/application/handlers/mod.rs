//! Application handlers.
//!
//! One handler per external operation, each wrapping a port.

pub mod design;
pub mod profile;

pub use design::{SuggestObjectiveCommand, SuggestObjectiveHandler};
pub use profile::{
    ListMasterKrasHandler, ListMasterKrasQuery, ListProfilesHandler, ListProfilesQuery,
    LoadProfileHandler, LoadProfileQuery, SaveProfileCommand, SaveProfileHandler,
    SaveProfileResult, DEFAULT_SAVED_MESSAGE,
};
