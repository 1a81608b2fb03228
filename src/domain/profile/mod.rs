//! Profile module - the aggregate persisted through the profile API.

mod aggregate;

pub use aggregate::Profile;
