//! Role module - what the profiled professional does.
//!
//! - `RoleRecord` - profession/department/role selection, description, tasks
//!   and key responsibilities
//! - `catalog` - static profession -> department -> role choices
//! - `MasterKra` / `KeyResponsibility` - shared responsibility catalog and tags

pub mod catalog;
mod record;
mod responsibility;

pub use record::{RoleRecord, UNTITLED_ROLE};
pub use responsibility::{KeyResponsibility, MasterKra};
