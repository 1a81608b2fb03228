//! SaveProfile - Command handler for the upsert.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::Profile;
use crate::ports::{ApiError, ProfileApi};

/// Message shown when the server sends none.
pub const DEFAULT_SAVED_MESSAGE: &str = "Saved!";

#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveProfileResult {
    pub id: ProfileId,
    pub message: String,
}

/// Handler for saving a profile.
///
/// A failed save returns the error and nothing else; the caller's profile
/// is never touched.
pub struct SaveProfileHandler {
    api: Arc<dyn ProfileApi>,
}

impl SaveProfileHandler {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<SaveProfileResult, ApiError> {
        let receipt = self.api.save_profile(&cmd.profile).await.map_err(|e| {
            tracing::error!(id = ?cmd.profile.id(), error = %e, "saving profile failed");
            e
        })?;

        if cmd.profile.id().is_none() {
            tracing::info!(id = %receipt.id, "profile assigned id");
        }
        let message = if receipt.message.trim().is_empty() {
            DEFAULT_SAVED_MESSAGE.to_string()
        } else {
            receipt.message
        };
        Ok(SaveProfileResult {
            id: receipt.id,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::{ApiOperation, InMemoryProfileApi, INSERTED_MESSAGE, UPDATED_MESSAGE};
    use crate::domain::role::MasterKra;
    use crate::ports::{ProfileSummary, SaveReceipt};
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_first_save_then_update() {
        let api = Arc::new(InMemoryProfileApi::new());
        let handler = SaveProfileHandler::new(api.clone());

        let first = handler
            .handle(SaveProfileCommand {
                profile: Profile::new(),
            })
            .await
            .unwrap();
        assert_eq!(first.message, INSERTED_MESSAGE);

        let second = handler
            .handle(SaveProfileCommand {
                profile: Profile::new().with_id(first.id),
            })
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.message, UPDATED_MESSAGE);
        assert_eq!(api.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_returned() {
        let api = Arc::new(InMemoryProfileApi::new());
        api.fail(ApiOperation::SaveProfile, ApiError::status_code(500, "boom"));
        let handler = SaveProfileHandler::new(api);

        let err = handler
            .handle(SaveProfileCommand {
                profile: Profile::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    struct SilentApi;

    #[async_trait]
    impl ProfileApi for SilentApi {
        async fn list_profiles(&self) -> Result<Vec<ProfileSummary>, ApiError> {
            unimplemented!()
        }

        async fn load_profile(&self, _id: ProfileId) -> Result<Profile, ApiError> {
            unimplemented!()
        }

        async fn save_profile(&self, _profile: &Profile) -> Result<SaveReceipt, ApiError> {
            Ok(SaveReceipt {
                id: ProfileId::new(5),
                message: String::new(),
            })
        }

        async fn list_master_kras(&self) -> Result<Vec<MasterKra>, ApiError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_empty_message_falls_back() {
        let handler = SaveProfileHandler::new(Arc::new(SilentApi));
        let result = handler
            .handle(SaveProfileCommand {
                profile: Profile::new(),
            })
            .await
            .unwrap();
        assert_eq!(result.message, DEFAULT_SAVED_MESSAGE);
        assert_eq!(result.id, ProfileId::new(5));
    }
}
