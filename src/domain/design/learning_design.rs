//! LearningDesign - objectives and checklist selections for stage two.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::rating::CompetencyId;

use super::ChecklistKind;

type Selections = BTreeMap<String, BTreeSet<String>>;

/// Learning objectives per competency plus selected checklist items.
///
/// Selection keys are always category names from the static catalogs;
/// deserialization drops anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LearningDesignWire")]
pub struct LearningDesign {
    #[serde(rename = "learningObjectives")]
    objectives: BTreeMap<CompetencyId, String>,
    #[serde(rename = "selectedAleComponents")]
    feature_components: Selections,
    #[serde(rename = "selectedSkiveApproaches")]
    approach_components: Selections,
}

impl LearningDesign {
    /// Objective text for a competency, empty when none was written.
    pub fn objective(&self, id: &CompetencyId) -> &str {
        self.objectives.get(id).map(String::as_str).unwrap_or_default()
    }

    pub fn objectives(&self) -> &BTreeMap<CompetencyId, String> {
        &self.objectives
    }

    /// Selected items per category for one catalog.
    pub fn selections(&self, kind: ChecklistKind) -> &Selections {
        match kind {
            ChecklistKind::AleFeatures => &self.feature_components,
            ChecklistKind::SkiveApproaches => &self.approach_components,
        }
    }

    pub fn is_selected(&self, kind: ChecklistKind, category: &str, item: &str) -> bool {
        self.selections(kind)
            .get(category)
            .is_some_and(|items| items.contains(item))
    }

    /// Total number of selected items in one catalog.
    pub fn selected_count(&self, kind: ChecklistKind) -> usize {
        self.selections(kind).values().map(BTreeSet::len).sum()
    }

    /// Returns a copy with the objective text for `id` replaced.
    pub fn with_objective(&self, id: CompetencyId, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.objectives.insert(id, text.into());
        next
    }

    /// Returns a copy with `item` checked or unchecked under `category`.
    ///
    /// # Errors
    ///
    /// `UnknownCategory` / `UnknownChecklistItem` when the pair is not part
    /// of the catalog for `kind`.
    pub fn with_toggled(
        &self,
        kind: ChecklistKind,
        category: &str,
        item: &str,
        checked: bool,
    ) -> Result<Self, DomainError> {
        let entry = kind.category(category).ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnknownCategory,
                format!("'{}' is not a {} category", category, kind.label()),
            )
            .with_detail("category", category)
        })?;
        if !entry.contains(item) {
            return Err(DomainError::new(
                ErrorCode::UnknownChecklistItem,
                format!("'{}' is not listed under '{}'", item, category),
            )
            .with_detail("category", category)
            .with_detail("item", item));
        }

        let mut next = self.clone();
        let selections = next.selections_mut(kind);
        let items = selections.entry(entry.name.to_string()).or_default();
        if checked {
            items.insert(item.to_string());
        } else {
            items.remove(item);
        }
        if items.is_empty() {
            selections.remove(entry.name);
        }
        Ok(next)
    }

    fn selections_mut(&mut self, kind: ChecklistKind) -> &mut Selections {
        match kind {
            ChecklistKind::AleFeatures => &mut self.feature_components,
            ChecklistKind::SkiveApproaches => &mut self.approach_components,
        }
    }
}

/// Lenient wire shape; every section may be missing.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LearningDesignWire {
    learning_objectives: BTreeMap<CompetencyId, String>,
    selected_ale_components: Selections,
    selected_skive_approaches: Selections,
}

impl From<LearningDesignWire> for LearningDesign {
    fn from(wire: LearningDesignWire) -> Self {
        Self {
            objectives: wire.learning_objectives,
            feature_components: retain_catalog(ChecklistKind::AleFeatures, wire.selected_ale_components),
            approach_components: retain_catalog(
                ChecklistKind::SkiveApproaches,
                wire.selected_skive_approaches,
            ),
        }
    }
}

fn retain_catalog(kind: ChecklistKind, selections: Selections) -> Selections {
    selections
        .into_iter()
        .filter_map(|(category, items)| {
            let entry = kind.category(&category)?;
            let items: BTreeSet<String> =
                items.into_iter().filter(|item| entry.contains(item)).collect();
            (!items.is_empty()).then_some((category, items))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASKS: &str = "Authentic Tasks";
    const WILD_CARDS: &str = "Unexpected event triggers or \"wild cards\"";

    #[test]
    fn objective_defaults_to_empty() {
        let design = LearningDesign::default();
        assert_eq!(design.objective(&CompetencyId::new("skills-cognitive-analytical")), "");
    }

    #[test]
    fn with_objective_overwrites_text() {
        let id = CompetencyId::new("ethics-virtue");
        let design = LearningDesign::default()
            .with_objective(id.clone(), "first")
            .with_objective(id.clone(), "second");
        assert_eq!(design.objective(&id), "second");
    }

    #[test]
    fn toggling_adds_and_removes_items() {
        let design = LearningDesign::default()
            .with_toggled(ChecklistKind::AleFeatures, TASKS, WILD_CARDS, true)
            .unwrap();
        assert!(design.is_selected(ChecklistKind::AleFeatures, TASKS, WILD_CARDS));
        assert!(!design.is_selected(ChecklistKind::SkiveApproaches, TASKS, WILD_CARDS));
        assert_eq!(design.selected_count(ChecklistKind::AleFeatures), 1);

        let cleared = design
            .with_toggled(ChecklistKind::AleFeatures, TASKS, WILD_CARDS, false)
            .unwrap();
        assert!(cleared.selections(ChecklistKind::AleFeatures).is_empty());
    }

    #[test]
    fn toggling_twice_is_idempotent() {
        let once = LearningDesign::default()
            .with_toggled(ChecklistKind::AleFeatures, TASKS, WILD_CARDS, true)
            .unwrap();
        let twice = once
            .with_toggled(ChecklistKind::AleFeatures, TASKS, WILD_CARDS, true)
            .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_category_is_never_created() {
        let err = LearningDesign::default()
            .with_toggled(ChecklistKind::SkiveApproaches, TASKS, WILD_CARDS, true)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownCategory);
    }

    #[test]
    fn item_must_belong_to_category() {
        let err = LearningDesign::default()
            .with_toggled(ChecklistKind::AleFeatures, TASKS, "Branching narrative structures", true)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownChecklistItem);
    }

    #[test]
    fn serializes_with_wire_names() {
        let design = LearningDesign::default()
            .with_objective(CompetencyId::new("ethics-virtue"), "Act with integrity")
            .with_toggled(ChecklistKind::SkiveApproaches, "Knowledge", "Interactive tutorials demonstrating concepts", true)
            .unwrap();
        let json = serde_json::to_value(&design).unwrap();

        assert_eq!(json["learningObjectives"]["ethics-virtue"], "Act with integrity");
        assert_eq!(
            json["selectedSkiveApproaches"]["Knowledge"][0],
            "Interactive tutorials demonstrating concepts"
        );
        assert!(json["selectedAleComponents"].as_object().unwrap().is_empty());
    }

    #[test]
    fn deserialization_drops_entries_outside_catalog() {
        let json = serde_json::json!({
            "selectedAleComponents": {
                "Authentic Tasks": [WILD_CARDS, "made up"],
                "Invented Category": ["anything"]
            }
        });
        let design: LearningDesign = serde_json::from_value(json).unwrap();

        let ale = design.selections(ChecklistKind::AleFeatures);
        assert_eq!(ale.len(), 1);
        assert_eq!(ale[TASKS].len(), 1);
        assert!(design.objectives().is_empty());
    }
}
