//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ratings, ids, errors, state machine)
//! - `rating` - SKIVE rating tree, averaging and the prioritised competency listing
//! - `role` - Role record and the profession catalog
//! - `wizard` - Step cursor across the profiling and design stages
//! - `archetype` - Reference personas a profile is manually associated with
//! - `design` - Learning objectives, checklist catalogs and suggestion state
//! - `profile` - The persisted profile aggregate

pub mod archetype;
pub mod design;
pub mod foundation;
pub mod profile;
pub mod rating;
pub mod role;
pub mod wizard;
