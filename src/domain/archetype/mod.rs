//! Archetype module - reference personas a profile can be associated with.
//!
//! Association is a manual single choice made by the user; nothing here scores
//! ratings against the tags.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
    pub dominant_tags: &'static [&'static str],
    pub supporting_tags: &'static [&'static str],
    pub example_titles: &'static [&'static str],
}

pub static ARCHETYPES: &[Archetype] = &[
    Archetype {
        name: "Analytical Strategist",
        description: "Data-driven decision maker with strong analytical and strategic thinking capabilities",
        dominant_tags: &["Skills-Cognitive", "Knowledge-Conceptual"],
        supporting_tags: &["Identity-Problem Solver", "Values-Objectivity"],
        example_titles: &["Management Consultant", "Financial Analyst", "Research Director"],
    },
    Archetype {
        name: "Empathetic People Leader",
        description: "Human-centered leader focused on team development and collaborative success",
        dominant_tags: &["Skills-Interpersonal", "Identity-Mentor", "Values-Team Wellbeing"],
        supporting_tags: &["Knowledge-Organisational", "Ethics-Relational"],
        example_titles: &["Team Manager", "HR Leader", "Executive Coach"],
    },
    Archetype {
        name: "Technical Virtuoso",
        description: "Domain expert with deep technical skills and precision-focused approach",
        dominant_tags: &["Skills-Psychomotor", "Knowledge-Procedural"],
        supporting_tags: &["Identity-Specialist", "Values-Mastery"],
        example_titles: &["Master Surgeon", "Elite Programmer", "Research Scientist"],
    },
    Archetype {
        name: "Ethical Guardian",
        description: "Principles-driven professional focused on integrity and moral reasoning",
        dominant_tags: &["Ethics-All", "Values-Integrity", "Knowledge-Regulatory"],
        supporting_tags: &["Skills-Critical Evaluation", "Skills-Communication"],
        example_titles: &["Judge", "Compliance Officer", "Ethics Consultant"],
    },
];

/// Looks up an archetype by exact name.
pub fn find_archetype(name: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|a| a.name == name)
}

/// Single-select toggle: picking the current choice clears it, picking any
/// other archetype replaces it.
pub fn toggle_choice(current: Option<&str>, clicked: &Archetype) -> Option<String> {
    if current == Some(clicked.name) {
        None
    } else {
        Some(clicked.name.to_string())
    }
}
