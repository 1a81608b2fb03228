//! ObjectivePrompt - role context plus one competency, rendered as text for
//! the suggestion endpoint.

use serde::Serialize;
use std::fmt::Write as _;

use crate::domain::rating::{display_name, CompetencyEntry, CompetencyId};
use crate::domain::role::RoleRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectivePrompt {
    pub competency: CompetencyId,
    pub competency_name: String,
    /// SKIVE dimension, e.g. "Skills".
    pub category: String,
    pub role_name: String,
    pub description: String,
    pub key_responsibilities: Vec<String>,
    pub day_to_day_tasks: Vec<String>,
}

impl ObjectivePrompt {
    pub fn new(role: &RoleRecord, entry: &CompetencyEntry) -> Self {
        Self {
            competency: entry.id.clone(),
            competency_name: entry.display_name.clone(),
            category: display_name(&entry.top_category),
            role_name: role.role_name().to_string(),
            description: role.description().trim().to_string(),
            key_responsibilities: role
                .key_responsibilities()
                .iter()
                .map(|kr| kr.label.clone())
                .collect(),
            day_to_day_tasks: role.day_to_day_tasks().to_vec(),
        }
    }

    /// Renders the request text. Empty context sections are omitted.
    pub fn render(&self) -> String {
        let mut text = format!(
            "Generate one concise SMART objective for the competency \"{}\" within the SKIVE dimension \"{}\".",
            self.competency_name, self.category
        );
        let _ = write!(text, "\nRole: {}", self.role_name);
        if !self.description.is_empty() {
            let _ = write!(text, "\nRole description: {}", self.description);
        }
        push_list(&mut text, "Key responsibilities", &self.key_responsibilities);
        push_list(&mut text, "Day-to-day tasks", &self.day_to_day_tasks);
        text
    }
}

fn push_list(text: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(text, "\n{}:", heading);
    for item in items {
        let _ = write!(text, "\n- {}", item);
    }
}
