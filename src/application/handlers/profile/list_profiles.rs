//! ListProfiles - Query handler for the dashboard list.

use std::sync::Arc;

use crate::ports::{ApiError, ProfileApi, ProfileSummary};

/// Query for every stored profile summary.
#[derive(Debug, Clone, Default)]
pub struct ListProfilesQuery;

/// Handler for listing profiles, newest `updated_at` first.
pub struct ListProfilesHandler {
    api: Arc<dyn ProfileApi>,
}

impl ListProfilesHandler {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, _query: ListProfilesQuery) -> Result<Vec<ProfileSummary>, ApiError> {
        let mut summaries = self.api.list_profiles().await.map_err(|e| {
            tracing::warn!(error = %e, "listing profiles failed");
            e
        })?;
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }
}
