//! ProfileApi port - the REST collaborator that stores profiles.
//!
//! Implementations talk to the persistence API (or stand in for it in
//! tests). Every call is independent; callers serialize per entity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{ProfileId, Timestamp};
use crate::domain::profile::Profile;
use crate::domain::role::{MasterKra, UNTITLED_ROLE};

/// Port for listing, loading and saving profiles.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Summaries of every stored profile.
    async fn list_profiles(&self) -> Result<Vec<ProfileSummary>, ApiError>;

    /// Full profile by id. The payload is merged onto a default profile.
    async fn load_profile(&self, id: ProfileId) -> Result<Profile, ApiError>;

    /// Upsert. A profile without id is inserted and receives one.
    async fn save_profile(&self, profile: &Profile) -> Result<SaveReceipt, ApiError>;

    /// Shared catalog of key responsibility areas.
    async fn list_master_kras(&self) -> Result<Vec<MasterKra>, ApiError>;
}

/// Dashboard row for a stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: ProfileId,
    #[serde(default)]
    pub specific_role: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub department: String,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub archetype: Option<String>,
}

impl ProfileSummary {
    /// Builds the summary row for a stored profile.
    pub fn of(id: ProfileId, profile: &Profile, updated_at: Timestamp) -> Self {
        let role = profile.role();
        Self {
            id,
            specific_role: role.specific_role().to_string(),
            profession: role.profession().to_string(),
            department: role.department().to_string(),
            updated_at,
            archetype: profile.archetype().map(str::to_string),
        }
    }

    /// Title shown in the list.
    pub fn title(&self) -> &str {
        if self.specific_role.trim().is_empty() {
            UNTITLED_ROLE
        } else {
            &self.specific_role
        }
    }
}

/// Response of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub id: ProfileId,
    #[serde(default)]
    pub message: String,
}

/// Errors from the persistence API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided detail, may be empty.
        message: String,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status_code(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::status_code(404, format!("{} not found", what))
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
