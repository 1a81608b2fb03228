//! Wizard module - step navigation across the profiling and design stages.

mod controller;
mod step;

pub use controller::Wizard;
pub use step::{ProfilingStep, WizardStage};
