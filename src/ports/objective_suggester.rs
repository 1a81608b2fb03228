//! ObjectiveSuggester port - AI text suggestion for a learning objective.

use async_trait::async_trait;
use thiserror::Error;

/// Port for generating objective text from a rendered prompt.
///
/// One call per competency; calls for different competencies may run
/// concurrently.
#[async_trait]
pub trait ObjectiveSuggester: Send + Sync {
    async fn suggest(&self, prompt: &str) -> Result<String, SuggestionError>;
}

/// Errors from the suggestion endpoint, scoped to one competency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("AI server {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Transport(String),

    /// Missing or empty `text` in the response.
    #[error("malformed suggestion: {0}")]
    Malformed(String),
}
