//! In-memory profile API.
//!
//! Backs the reference server and tests. Keeps every saved profile in a
//! map, assigns ids from a counter and can be told to fail specific
//! operations. Does not persist across restarts.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{ProfileId, Timestamp};
use crate::domain::profile::Profile;
use crate::domain::role::MasterKra;
use crate::ports::{ApiError, ProfileApi, ProfileSummary, SaveReceipt};

pub const INSERTED_MESSAGE: &str = "Profile saved successfully";
pub const UPDATED_MESSAGE: &str = "Profile updated successfully";

/// Operations that can be observed or made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    ListProfiles,
    LoadProfile,
    SaveProfile,
    ListMasterKras,
}

#[derive(Debug, Clone)]
struct StoredProfile {
    profile: Profile,
    updated_at: Timestamp,
}

#[derive(Debug, Default)]
struct State {
    profiles: BTreeMap<ProfileId, StoredProfile>,
    next_id: i64,
    last_write: Option<Timestamp>,
    master_kras: Vec<MasterKra>,
    failures: HashMap<ApiOperation, ApiError>,
    calls: HashMap<ApiOperation, usize>,
}

impl State {
    /// Strictly increasing write time so listing order is deterministic.
    fn next_write_time(&mut self) -> Timestamp {
        let now = Timestamp::now();
        let stamp = match self.last_write {
            Some(last) if !now.is_after(&last) => last.plus_secs(1),
            _ => now,
        };
        self.last_write = Some(stamp);
        stamp
    }
}

/// Thread-safe in-memory implementation of [`ProfileApi`].
#[derive(Debug)]
pub struct InMemoryProfileApi {
    state: Mutex<State>,
}

impl Default for InMemoryProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProfileApi {
    /// Empty store with no master KRAs.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                ..State::default()
            }),
        }
    }

    /// Store seeded with a small master KRA catalog.
    pub fn seeded() -> Self {
        Self::new().with_master_kras(default_master_kras())
    }

    pub fn with_master_kras(self, kras: Vec<MasterKra>) -> Self {
        self.lock().master_kras = kras;
        self
    }

    /// Makes every call of `operation` fail with `error` until cleared.
    pub fn fail(&self, operation: ApiOperation, error: ApiError) {
        self.lock().failures.insert(operation, error);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Number of calls made to `operation`, failed ones included.
    pub fn call_count(&self, operation: ApiOperation) -> usize {
        self.lock().calls.get(&operation).copied().unwrap_or(0)
    }

    /// Stored profile by id.
    pub fn stored(&self, id: ProfileId) -> Option<Profile> {
        self.lock().profiles.get(&id).map(|s| s.profile.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Records the call and returns the injected failure, if any.
    fn enter(&self, operation: ApiOperation) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.lock();
        *state.calls.entry(operation).or_insert(0) += 1;
        if let Some(error) = state.failures.get(&operation).cloned() {
            tracing::debug!(?operation, %error, "injected failure");
            return Err(error);
        }
        Ok(state)
    }
}

#[async_trait]
impl ProfileApi for InMemoryProfileApi {
    async fn list_profiles(&self) -> Result<Vec<ProfileSummary>, ApiError> {
        let state = self.enter(ApiOperation::ListProfiles)?;
        let mut summaries: Vec<ProfileSummary> = state
            .profiles
            .iter()
            .map(|(id, stored)| ProfileSummary::of(*id, &stored.profile, stored.updated_at))
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn load_profile(&self, id: ProfileId) -> Result<Profile, ApiError> {
        let state = self.enter(ApiOperation::LoadProfile)?;
        state
            .profiles
            .get(&id)
            .map(|stored| stored.profile.clone())
            .ok_or_else(|| ApiError::not_found(format!("Profile {}", id)))
    }

    async fn save_profile(&self, profile: &Profile) -> Result<SaveReceipt, ApiError> {
        let mut state = self.enter(ApiOperation::SaveProfile)?;
        let (id, message) = match profile.id() {
            Some(id) if state.profiles.contains_key(&id) => (id, UPDATED_MESSAGE),
            Some(id) => return Err(ApiError::not_found(format!("Profile {}", id))),
            None => {
                let id = ProfileId::new(state.next_id);
                state.next_id += 1;
                (id, INSERTED_MESSAGE)
            }
        };
        let updated_at = state.next_write_time();
        state.profiles.insert(
            id,
            StoredProfile {
                profile: profile.with_id(id),
                updated_at,
            },
        );
        tracing::debug!(%id, message, "stored profile");
        Ok(SaveReceipt {
            id,
            message: message.to_string(),
        })
    }

    async fn list_master_kras(&self) -> Result<Vec<MasterKra>, ApiError> {
        let state = self.enter(ApiOperation::ListMasterKras)?;
        Ok(state.master_kras.clone())
    }
}

/// Starter master KRA list, bucketed by profession.
pub fn default_master_kras() -> Vec<MasterKra> {
    [
        ("Software Engineering", "System architecture and design"),
        ("Software Engineering", "Code quality and review"),
        ("Software Engineering", "Production reliability"),
        ("Software Engineering", "Technical mentoring"),
        ("Healthcare", "Patient safety"),
        ("Healthcare", "Clinical documentation"),
        ("Healthcare", "Care coordination"),
        ("Finance", "Regulatory reporting"),
        ("Finance", "Risk assessment"),
        ("Education", "Curriculum design"),
        ("Education", "Learner assessment"),
        ("Law", "Case preparation"),
        ("Law", "Client advisory"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (bucket, label))| MasterKra::new(i as i64 + 1, label, bucket))
    .collect()
}
