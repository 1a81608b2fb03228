//! Paths and identifiers addressing rating tree leaves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Path from the tree root to one node, e.g. `skills.cognitive.analytical`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompetencyPath(Vec<String>);

impl CompetencyPath {
    /// Builds a path from its segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parses a dot-separated path. Empty segments are rejected.
    pub fn parse(dotted: &str) -> Result<Self, ValidationError> {
        let segments: Vec<String> = dotted.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ValidationError::invalid_format(
                "competency_path",
                format!("'{}' contains an empty segment", dotted),
            ));
        }
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// First segment: the SKIVE branch.
    pub fn top_category(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    /// Intermediate segment when the leaf sits below a subcategory,
    /// otherwise the top category.
    pub fn sub_category(&self) -> &str {
        if self.0.len() > 2 {
            self.0[1].as_str()
        } else {
            self.top_category()
        }
    }

    /// Last segment: the competency key.
    pub fn leaf_name(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Stable dash-joined identifier used as the objectives key.
    pub fn competency_id(&self) -> CompetencyId {
        CompetencyId(self.0.join("-"))
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }
}

impl fmt::Display for CompetencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Stable identifier of one competency, e.g. `skills-cognitive-analytical`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetencyId(String);

impl CompetencyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns a camelCase key into a title, e.g. `decisionMaking` -> `Decision Making`.
pub fn display_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}
