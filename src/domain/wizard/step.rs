//! Wizard steps and stages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Steps of the profiling stage, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfilingStep {
    Role,
    Skills,
    Knowledge,
    Identity,
    Values,
    Ethics,
    Summary,
}

impl ProfilingStep {
    /// The canonical step order.
    pub const ORDER: [ProfilingStep; 7] = [
        ProfilingStep::Role,
        ProfilingStep::Skills,
        ProfilingStep::Knowledge,
        ProfilingStep::Identity,
        ProfilingStep::Values,
        ProfilingStep::Ethics,
        ProfilingStep::Summary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfilingStep::Role => "Role",
            ProfilingStep::Skills => "Skills",
            ProfilingStep::Knowledge => "Knowledge",
            ProfilingStep::Identity => "Identity",
            ProfilingStep::Values => "Values",
            ProfilingStep::Ethics => "Ethics",
            ProfilingStep::Summary => "Summary",
        }
    }

    /// Top-level rating branch edited on this step, if it is a rating step.
    pub fn rating_branch(&self) -> Option<&'static str> {
        match self {
            ProfilingStep::Skills => Some("skills"),
            ProfilingStep::Knowledge => Some("knowledge"),
            ProfilingStep::Identity => Some("identity"),
            ProfilingStep::Values => Some("values"),
            ProfilingStep::Ethics => Some("ethics"),
            ProfilingStep::Role | ProfilingStep::Summary => None,
        }
    }
}

impl fmt::Display for ProfilingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stage of the overall flow.
///
/// ```text
/// Profiling <-> Designing -> Finished
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    #[default]
    Profiling,
    Designing,
    Finished,
}

impl StateMachine for WizardStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStage::*;
        matches!(
            (self, target),
            (Profiling, Designing) | (Designing, Profiling) | (Designing, Finished)
        )
    }

    fn is_terminal(&self) -> bool {
        matches!(self, WizardStage::Finished)
    }
}
