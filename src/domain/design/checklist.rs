//! Static checklist catalogs for the learning-environment design.
//!
//! Two catalogs exist: Authentic Learning Environment features and
//! SKIVE-aligned game approaches. Each is a list of categories with a fixed
//! set of items.

use serde::{Deserialize, Serialize};

/// A named group of checklist items.
#[derive(Debug, PartialEq, Eq)]
pub struct ChecklistCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

impl ChecklistCategory {
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| *i == item)
    }
}

/// Which of the two catalogs a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistKind {
    AleFeatures,
    SkiveApproaches,
}

impl ChecklistKind {
    pub fn categories(&self) -> &'static [ChecklistCategory] {
        match self {
            ChecklistKind::AleFeatures => ALE_FEATURES,
            ChecklistKind::SkiveApproaches => SKIVE_APPROACHES,
        }
    }

    pub fn category(&self, name: &str) -> Option<&'static ChecklistCategory> {
        self.categories().iter().find(|c| c.name == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChecklistKind::AleFeatures => "Authentic-Learning Features",
            ChecklistKind::SkiveApproaches => "SKIVE-Aligned Game Approaches",
        }
    }
}

pub static ALE_FEATURES: &[ChecklistCategory] = &[
    ChecklistCategory {
        name: "Authentic Tasks",
        items: &[
            "Scenario-based challenges with ill-defined problems",
            "Dynamic data feeds reflecting real-time changes",
            "Resource management systems with constraints",
            "Unexpected event triggers or \"wild cards\"",
            "Systems modeling conflicting goals or stakeholder needs",
            "Information displays with asymmetry or \"fog-of-war\"",
        ],
    },
    ChecklistCategory {
        name: "Multiple Perspectives",
        items: &[
            "Multiplayer modes (co-op/competitive)",
            "AI agents with distinct goals, biases, or personalities",
            "Branching narrative structures",
            "Access to diverse in-game information sources",
        ],
    },
    ChecklistCategory {
        name: "Collaboration & Social Dialogue",
        items: &[
            "Integrated text or voice chat systems",
            "Sophisticated NPC dialogue with meaningful choices",
            "Shared task interfaces or objectives",
            "In-game forums or knowledge-sharing channels",
        ],
    },
    ChecklistCategory {
        name: "Reflection & Articulation",
        items: &[
            "In-game journaling tools or \"captain's logs\"",
            "Guided reflection prompts after key events",
            "Action replay or review systems",
            "Game mechanics requiring players to justify choices",
        ],
    },
    ChecklistCategory {
        name: "Scaffolding & Coaching",
        items: &[
            "Introductory tutorial levels or guided practice",
            "Adaptive hint systems based on player performance",
            "In-game AI mentors or characters offering advice",
            "Progressively increasing difficulty and complexity",
        ],
    },
    ChecklistCategory {
        name: "Authentic Context",
        items: &[
            "Rich narrative backstories and world-building",
            "Realistic environmental design (visual, auditory, haptic)",
            "Game rules mirroring real-world limitations",
            "Culturally relevant scenarios, characters, dilemmas",
        ],
    },
];

pub static SKIVE_APPROACHES: &[ChecklistCategory] = &[
    ChecklistCategory {
        name: "Skills (Cognitive)",
        items: &[
            "Puzzle mechanics requiring logical deduction",
            "Data-interpretation interfaces and mini-games",
            "Systems demanding pattern recognition",
            "Complex decision-tree navigation",
            "Investigative tasks with clues and red herrings",
            "Simulations requiring strategic planning",
        ],
    },
    ChecklistCategory {
        name: "Skills (Interpersonal)",
        items: &[
            "Dialogue systems with nuanced emotional responses",
            "Negotiation mechanics with AI or human players",
            "Team-based objectives requiring shared understanding",
            "Role-playing scenarios for conflict resolution",
        ],
    },
    ChecklistCategory {
        name: "Skills (Psychomotor)",
        items: &[
            "Physics-based interaction mechanics for tool use",
            "Direct manipulation controls requiring dexterity",
            "Simulations of physical procedures",
            "Tasks emphasizing precise timing and coordination",
        ],
    },
    ChecklistCategory {
        name: "Knowledge",
        items: &[
            "In-game encyclopedias / manuals / knowledge bases",
            "Interactive tutorials demonstrating concepts",
            "Scenarios requiring direct application of theories",
            "Feedback systems that correct misconceptions",
        ],
    },
    ChecklistCategory {
        name: "Identity",
        items: &[
            "Avatar customisation reflecting professional roles",
            "Narrative choices that shape professional identity",
            "NPCs who recognise & respond to the player's role",
            "Opportunities to take on leadership or specialist roles",
        ],
    },
    ChecklistCategory {
        name: "Values & Ethics",
        items: &[
            "Moral / ethical dilemma scenarios in the narrative",
            "Branching storylines with value-laden consequences",
            "Systems tracking reputation / trust / ethical standing",
            "Reflective prompts on ethical considerations",
        ],
    },
];
