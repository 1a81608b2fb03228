//! ProfileWorkspace - one profile being edited through the wizard.
//!
//! Owns the current profile, the wizard cursor, save status and the
//! per-competency suggestion states. Every edit swaps in a new profile
//! value; the lock is never held across an await, so a save and any number
//! of suggestions for different competencies can be in flight together.
//!
//! Guards:
//! - one save at a time (`SaveInProgress`)
//! - one suggestion per competency at a time (`SuggestionPending`)

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::domain::archetype::Archetype;
use crate::domain::design::{ChecklistKind, ObjectivePrompt, SuggestionState, SuggestionTracker};
use crate::domain::foundation::{DomainError, ErrorCode, Rating};
use crate::domain::profile::Profile;
use crate::domain::rating::{CompetencyEntry, CompetencyId, CompetencyPath};
use crate::domain::role::{KeyResponsibility, MasterKra, RoleRecord};
use crate::domain::wizard::{Wizard, WizardStage};
use crate::ports::{ApiError, ObjectiveSuggester, ProfileApi, SuggestionError};

use super::handlers::{
    ListMasterKrasHandler, ListMasterKrasQuery, SaveProfileCommand, SaveProfileHandler,
    SaveProfileResult, SuggestObjectiveCommand, SuggestObjectiveHandler,
};

/// Visible outcome of the most recent save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved(String),
    Failed(String),
}

impl SaveStatus {
    pub fn is_saving(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }

    /// Inline message to display, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SaveStatus::Saved(msg) | SaveStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("a save is already in progress")]
    SaveInProgress,

    #[error("a suggestion for '{0}' is already in progress")]
    SuggestionPending(CompetencyId),

    #[error("'{0}' is not among the prioritised competencies")]
    NotPrioritised(CompetencyId),

    #[error("suggestion for '{competency}' failed: {source}")]
    Suggestion {
        competency: CompetencyId,
        #[source]
        source: SuggestionError,
    },

    #[error("the wizard is not on the last step of this stage")]
    NotAtLastStep,

    /// The save went through but the wizard left the design stage meanwhile.
    #[error("profile {} saved, but the wizard left the design stage", .saved.id)]
    StageChanged { saved: SaveProfileResult },
}

#[derive(Debug, Default)]
struct WorkspaceState {
    profile: Profile,
    wizard: Wizard,
    save_status: SaveStatus,
    suggestions: SuggestionTracker,
    master_kras: Vec<MasterKra>,
}

impl WorkspaceState {
    /// Replaces the profile and clears a stale save message.
    fn replace_profile(&mut self, profile: Profile) {
        self.profile = profile;
        if !self.save_status.is_saving() {
            self.save_status = SaveStatus::Idle;
        }
    }
}

pub struct ProfileWorkspace {
    state: Mutex<WorkspaceState>,
    save_handler: SaveProfileHandler,
    suggest_handler: SuggestObjectiveHandler,
    kras_handler: ListMasterKrasHandler,
}

impl ProfileWorkspace {
    /// Workspace for a brand-new profile.
    pub fn new(api: Arc<dyn ProfileApi>, suggester: Arc<dyn ObjectiveSuggester>) -> Self {
        Self::open(Profile::new(), api, suggester)
    }

    /// Workspace for an existing (e.g. loaded) profile, starting at step one.
    pub fn open(
        profile: Profile,
        api: Arc<dyn ProfileApi>,
        suggester: Arc<dyn ObjectiveSuggester>,
    ) -> Self {
        Self {
            state: Mutex::new(WorkspaceState {
                profile,
                ..WorkspaceState::default()
            }),
            save_handler: SaveProfileHandler::new(api.clone()),
            suggest_handler: SuggestObjectiveHandler::new(suggester),
            kras_handler: ListMasterKrasHandler::new(api),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WorkspaceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ───────────────────────────────────────────────────────────────
    // Read side
    // ───────────────────────────────────────────────────────────────

    pub fn profile(&self) -> Profile {
        self.lock().profile.clone()
    }

    pub fn wizard(&self) -> Wizard {
        self.lock().wizard
    }

    pub fn save_status(&self) -> SaveStatus {
        self.lock().save_status.clone()
    }

    pub fn suggestion_state(&self, id: &CompetencyId) -> SuggestionState {
        self.lock().suggestions.state(id)
    }

    /// Prioritised competencies of the current ratings.
    pub fn competencies(&self) -> Vec<CompetencyEntry> {
        self.lock().profile.competencies()
    }

    /// Master KRAs for the current profession not yet attached to the role.
    pub fn available_master_kras(&self) -> Vec<MasterKra> {
        let state = self.lock();
        state
            .profile
            .role()
            .available_master_kras(&state.master_kras)
            .into_iter()
            .cloned()
            .collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Edits
    // ───────────────────────────────────────────────────────────────

    /// Applies a fallible edit to the whole profile.
    pub fn edit<F>(&self, edit: F) -> Result<Profile, WorkspaceError>
    where
        F: FnOnce(&Profile) -> Result<Profile, DomainError>,
    {
        let mut state = self.lock();
        let next = edit(&state.profile)?;
        state.replace_profile(next.clone());
        Ok(next)
    }

    pub fn update_role<F>(&self, edit: F) -> Result<Profile, WorkspaceError>
    where
        F: FnOnce(&RoleRecord) -> Result<RoleRecord, DomainError>,
    {
        self.edit(|profile| Ok(profile.with_role(edit(profile.role())?)))
    }

    /// Attaches a master KRA to the role, recording its source id.
    pub fn add_master_kra(&self, kra: &MasterKra) -> Result<Profile, WorkspaceError> {
        self.update_role(|role| role.with_responsibility(KeyResponsibility::from_master(kra)))
    }

    pub fn set_rating(&self, path: &CompetencyPath, value: Rating) -> Result<Profile, WorkspaceError> {
        self.edit(|profile| profile.with_rating(path, value)).map_err(|e| {
            if let WorkspaceError::Domain(ref err) = e {
                if err.code() == ErrorCode::InvalidPath {
                    tracing::error!(%path, "rating path does not resolve to a leaf");
                }
            }
            e
        })
    }

    pub fn toggle_archetype(&self, archetype: &Archetype) -> Profile {
        let mut state = self.lock();
        let next = state.profile.toggle_archetype(archetype);
        state.replace_profile(next.clone());
        next
    }

    pub fn set_objective(&self, id: CompetencyId, text: impl Into<String>) -> Profile {
        let mut state = self.lock();
        let next = state.profile.with_objective(id, text);
        state.replace_profile(next.clone());
        next
    }

    pub fn toggle_checklist_item(
        &self,
        kind: ChecklistKind,
        category: &str,
        item: &str,
        checked: bool,
    ) -> Result<Profile, WorkspaceError> {
        self.edit(|profile| profile.with_checklist_item(kind, category, item, checked))
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    pub fn next_step(&self) -> Wizard {
        let mut state = self.lock();
        state.wizard = state.wizard.next();
        state.wizard
    }

    pub fn previous_step(&self) -> Wizard {
        let mut state = self.lock();
        state.wizard = state.wizard.previous();
        state.wizard
    }

    /// Moves from the profiling summary into the design stage.
    pub fn complete_profiling(&self) -> Result<Wizard, WorkspaceError> {
        let mut state = self.lock();
        if state.wizard.stage() != WizardStage::Profiling || !state.wizard.can_complete() {
            return Err(WorkspaceError::NotAtLastStep);
        }
        state.wizard = state.wizard.complete()?;
        tracing::debug!("entered design stage");
        Ok(state.wizard)
    }

    /// Leaves the design stage for the first profiling step. Not allowed
    /// while a save is in flight, since `finish` completes the stage after it.
    pub fn back_to_profiling(&self) -> Result<Wizard, WorkspaceError> {
        let mut state = self.lock();
        if state.save_status.is_saving() {
            return Err(WorkspaceError::SaveInProgress);
        }
        state.wizard = state.wizard.back_to_profiling()?;
        Ok(state.wizard)
    }

    // ───────────────────────────────────────────────────────────────
    // External calls
    // ───────────────────────────────────────────────────────────────

    /// Saves the current profile.
    ///
    /// On success the returned id is applied to the profile as it is now,
    /// keeping edits made while the request was in flight. On failure the
    /// profile is untouched and the status carries the error message.
    pub async fn save(&self) -> Result<SaveProfileResult, WorkspaceError> {
        let snapshot = {
            let mut state = self.lock();
            if state.save_status.is_saving() {
                return Err(WorkspaceError::SaveInProgress);
            }
            state.save_status = SaveStatus::Saving;
            state.profile.clone()
        };

        let outcome = self
            .save_handler
            .handle(SaveProfileCommand { profile: snapshot })
            .await;

        let mut state = self.lock();
        match outcome {
            Ok(result) => {
                state.profile = state.profile.with_id(result.id);
                state.save_status = SaveStatus::Saved(result.message.clone());
                Ok(result)
            }
            Err(e) => {
                state.save_status = SaveStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Completes the design stage: saves, and only a successful save
    /// finishes the wizard.
    pub async fn finish(&self) -> Result<SaveProfileResult, WorkspaceError> {
        {
            let state = self.lock();
            if state.wizard.stage() != WizardStage::Designing || !state.wizard.can_complete() {
                return Err(WorkspaceError::NotAtLastStep);
            }
        }
        let result = self.save().await?;
        let mut state = self.lock();
        if !state.wizard.can_complete() {
            tracing::warn!(id = %result.id, stage = ?state.wizard.stage(), "saved but stage changed before finishing");
            return Err(WorkspaceError::StageChanged { saved: result });
        }
        state.wizard = state.wizard.complete()?;
        tracing::info!(id = %result.id, "profile finished");
        Ok(result)
    }

    /// Requests an AI objective for one prioritised competency.
    ///
    /// The returned text overwrites that competency's objective. A failure
    /// leaves the objective as it was and is recorded against the
    /// competency only.
    pub async fn suggest_objective(&self, id: &CompetencyId) -> Result<String, WorkspaceError> {
        let prompt = {
            let mut state = self.lock();
            let entry = state
                .profile
                .competencies()
                .into_iter()
                .find(|entry| &entry.id == id)
                .ok_or_else(|| WorkspaceError::NotPrioritised(id.clone()))?;
            state
                .suggestions
                .begin(id)
                .map_err(|_| WorkspaceError::SuggestionPending(id.clone()))?;
            ObjectivePrompt::new(state.profile.role(), &entry)
        };

        let outcome = self
            .suggest_handler
            .handle(SuggestObjectiveCommand::for_competency(&prompt))
            .await;

        let mut state = self.lock();
        match outcome {
            Ok(text) => {
                state.suggestions.succeed(id).map_err(DomainError::from)?;
                let next = state.profile.with_objective(id.clone(), text.clone());
                state.replace_profile(next);
                Ok(text)
            }
            Err(source) => {
                state
                    .suggestions
                    .fail(id, source.to_string())
                    .map_err(DomainError::from)?;
                Err(WorkspaceError::Suggestion {
                    competency: id.clone(),
                    source,
                })
            }
        }
    }

    /// Fetches the master KRA catalog for the responsibility picker.
    pub async fn load_master_kras(&self) -> Result<Vec<MasterKra>, WorkspaceError> {
        let kras = self.kras_handler.handle(ListMasterKrasQuery::default()).await?;
        self.lock().master_kras = kras.clone();
        Ok(kras)
    }
}
