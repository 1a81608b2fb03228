//! ProfileDashboard - the saved-profiles list shown before the wizard.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::foundation::ProfileId;
use crate::domain::profile::Profile;
use crate::ports::{ApiError, ProfileApi, ProfileSummary};

use super::handlers::{ListProfilesHandler, ListProfilesQuery, LoadProfileHandler, LoadProfileQuery};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DashboardStatus {
    #[default]
    Loading,
    Loaded(Vec<ProfileSummary>),
    /// Shown with a retry affordance.
    Failed(String),
}

pub struct ProfileDashboard {
    status: Mutex<DashboardStatus>,
    list_handler: ListProfilesHandler,
    load_handler: LoadProfileHandler,
}

impl ProfileDashboard {
    /// Starts in `Loading`; call [`refresh`](Self::refresh) to fetch.
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self {
            status: Mutex::new(DashboardStatus::Loading),
            list_handler: ListProfilesHandler::new(api.clone()),
            load_handler: LoadProfileHandler::new(api),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DashboardStatus> {
        self.status.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn status(&self) -> DashboardStatus {
        self.lock().clone()
    }

    /// Fetches the list, newest first. Failures land in the status.
    pub async fn refresh(&self) -> DashboardStatus {
        *self.lock() = DashboardStatus::Loading;
        let next = match self.list_handler.handle(ListProfilesQuery).await {
            Ok(summaries) => DashboardStatus::Loaded(summaries),
            Err(e) => DashboardStatus::Failed(format!("Could not load saved profiles: {}", e)),
        };
        *self.lock() = next.clone();
        next
    }

    /// Same as `refresh`; offered after a failure.
    pub async fn retry(&self) -> DashboardStatus {
        self.refresh().await
    }

    /// Loads a stored profile for editing. A failure is also recorded in
    /// the status so the list shows it with a retry.
    pub async fn open(&self, id: ProfileId) -> Result<Profile, ApiError> {
        self.load_handler
            .handle(LoadProfileQuery { id })
            .await
            .map_err(|e| {
                *self.lock() = DashboardStatus::Failed(format!("Could not load profile {}: {}", id, e));
                e
            })
    }

    /// A blank profile for the "new profile" action.
    pub fn new_profile(&self) -> Profile {
        Profile::new()
    }
}
