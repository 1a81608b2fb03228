//! Key responsibility tags and the shared master list they are drawn from.

use serde::{Deserialize, Serialize};

/// Shared catalog entry of a known key responsibility area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterKra {
    pub id: i64,
    pub label: String,
    /// Profession the entry belongs to, used for filtering.
    pub bucket: String,
}

impl MasterKra {
    pub fn new(id: i64, label: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            bucket: bucket.into(),
        }
    }
}

/// A key responsibility attached to a role.
///
/// `source_id` points at the master entry it came from; `None` marks a
/// user-authored tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResponsibility {
    #[serde(default)]
    pub source_id: Option<i64>,
    pub label: String,
}

impl KeyResponsibility {
    /// A tag typed in by the user.
    pub fn authored(label: impl Into<String>) -> Self {
        Self {
            source_id: None,
            label: label.into(),
        }
    }

    /// A tag picked from the master list.
    pub fn from_master(kra: &MasterKra) -> Self {
        Self {
            source_id: Some(kra.id),
            label: kra.label.clone(),
        }
    }

    pub fn is_user_authored(&self) -> bool {
        self.source_id.is_none()
    }

    /// Label comparison ignoring case (full Unicode folding) and padding.
    pub fn matches_label(&self, label: &str) -> bool {
        self.label.trim().to_lowercase() == label.trim().to_lowercase()
    }
}
