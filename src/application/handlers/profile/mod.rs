//! Profile handlers - list, load and save profiles, list master KRAs.

mod list_master_kras;
mod list_profiles;
mod load_profile;
mod save_profile;

pub use list_master_kras::{ListMasterKrasHandler, ListMasterKrasQuery};
pub use list_profiles::{ListProfilesHandler, ListProfilesQuery};
pub use load_profile::{LoadProfileHandler, LoadProfileQuery};
pub use save_profile::{
    SaveProfileCommand, SaveProfileHandler, SaveProfileResult, DEFAULT_SAVED_MESSAGE,
};
