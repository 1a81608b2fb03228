//! Profile aggregate.
//!
//! Created in memory with every rating Low and empty text. Each edit returns
//! a whole new profile; the id is assigned by the API on first save.

use serde::{Deserialize, Serialize};

use crate::domain::archetype::{toggle_choice, Archetype};
use crate::domain::design::{ChecklistKind, LearningDesign};
use crate::domain::foundation::{DomainError, ProfileId, Rating};
use crate::domain::rating::{flatten, CompetencyEntry, CompetencyId, CompetencyPath, RatingTree};
use crate::domain::role::RoleRecord;

/// Wire shape: `{ id, roleData, skiveRatings, aleDesign, archetype }`.
/// Missing sections fall back to their defaults on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    id: Option<ProfileId>,
    role_data: RoleRecord,
    skive_ratings: RatingTree,
    ale_design: LearningDesign,
    archetype: Option<String>,
}

impl Profile {
    /// A fresh, unsaved profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<ProfileId> {
        self.id
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub fn role(&self) -> &RoleRecord {
        &self.role_data
    }

    pub fn ratings(&self) -> &RatingTree {
        &self.skive_ratings
    }

    pub fn design(&self) -> &LearningDesign {
        &self.ale_design
    }

    pub fn archetype(&self) -> Option<&str> {
        self.archetype.as_deref()
    }

    /// Prioritised competencies, recomputed from the current ratings.
    pub fn competencies(&self) -> Vec<CompetencyEntry> {
        flatten(&self.skive_ratings)
    }

    pub fn with_id(&self, id: ProfileId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn with_role(&self, role: RoleRecord) -> Self {
        Self {
            role_data: role,
            ..self.clone()
        }
    }

    /// Applies `edit` to the role record.
    pub fn map_role<F>(&self, edit: F) -> Self
    where
        F: FnOnce(&RoleRecord) -> RoleRecord,
    {
        self.with_role(edit(&self.role_data))
    }

    pub fn with_rating(&self, path: &CompetencyPath, value: Rating) -> Result<Self, DomainError> {
        let ratings = self.skive_ratings.set_leaf(path, value)?;
        Ok(Self {
            skive_ratings: ratings,
            ..self.clone()
        })
    }

    pub fn with_objective(&self, id: CompetencyId, text: impl Into<String>) -> Self {
        Self {
            ale_design: self.ale_design.with_objective(id, text),
            ..self.clone()
        }
    }

    pub fn with_checklist_item(
        &self,
        kind: ChecklistKind,
        category: &str,
        item: &str,
        checked: bool,
    ) -> Result<Self, DomainError> {
        let design = self.ale_design.with_toggled(kind, category, item, checked)?;
        Ok(Self {
            ale_design: design,
            ..self.clone()
        })
    }

    /// Selects `clicked`, or clears the choice when it is already selected.
    pub fn toggle_archetype(&self, clicked: &Archetype) -> Self {
        Self {
            archetype: toggle_choice(self.archetype.as_deref(), clicked),
            ..self.clone()
        }
    }
}
