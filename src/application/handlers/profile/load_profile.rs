//! LoadProfile - Query handler for opening a stored profile.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::Profile;
use crate::ports::{ApiError, ProfileApi};

#[derive(Debug, Clone)]
pub struct LoadProfileQuery {
    pub id: ProfileId,
}

/// Handler for loading a full profile.
///
/// The payload is already merged onto defaults by deserialization; a payload
/// without `id` takes the requested one.
pub struct LoadProfileHandler {
    api: Arc<dyn ProfileApi>,
}

impl LoadProfileHandler {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: LoadProfileQuery) -> Result<Profile, ApiError> {
        let profile = self.api.load_profile(query.id).await.map_err(|e| {
            tracing::warn!(id = %query.id, error = %e, "loading profile failed");
            e
        })?;
        Ok(match profile.id() {
            Some(_) => profile,
            None => profile.with_id(query.id),
        })
    }
}
