//! Application layer - handlers plus the stateful wizard workspace.
//!
//! Handlers wrap one port call each. `ProfileWorkspace` drives a single
//! profile through the wizard; `ProfileDashboard` lists and opens profiles.

pub mod dashboard;
pub mod handlers;
pub mod workspace;

pub use dashboard::{DashboardStatus, ProfileDashboard};
pub use workspace::{ProfileWorkspace, SaveStatus, WorkspaceError};
