//! SuggestObjective - Command handler for one AI objective suggestion.

use std::sync::Arc;

use crate::domain::design::ObjectivePrompt;
use crate::domain::rating::CompetencyId;
use crate::ports::{ObjectiveSuggester, SuggestionError};

#[derive(Debug, Clone)]
pub struct SuggestObjectiveCommand {
    pub prompt: String,
    /// Competency the text is for, when known.
    pub competency: Option<CompetencyId>,
}

impl SuggestObjectiveCommand {
    /// Renders a competency prompt.
    pub fn for_competency(prompt: &ObjectivePrompt) -> Self {
        Self {
            prompt: prompt.render(),
            competency: Some(prompt.competency.clone()),
        }
    }

    /// Free-form prompt text as received over HTTP.
    pub fn raw(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            competency: None,
        }
    }
}

/// Handler that asks the suggester for objective text.
///
/// Holds no per-competency state; in-flight guarding belongs to the caller.
pub struct SuggestObjectiveHandler {
    suggester: Arc<dyn ObjectiveSuggester>,
}

impl SuggestObjectiveHandler {
    pub fn new(suggester: Arc<dyn ObjectiveSuggester>) -> Self {
        Self { suggester }
    }

    pub async fn handle(&self, cmd: SuggestObjectiveCommand) -> Result<String, SuggestionError> {
        if cmd.prompt.trim().is_empty() {
            return Err(SuggestionError::Malformed("prompt is empty".to_string()));
        }
        let competency = cmd.competency.as_ref().map(CompetencyId::as_str).unwrap_or("-");
        tracing::debug!(competency, "requesting objective suggestion");
        match self.suggester.suggest(&cmd.prompt).await {
            Ok(text) => {
                tracing::debug!(competency, chars = text.len(), "suggestion received");
                Ok(text)
            }
            Err(e) => {
                tracing::warn!(competency, error = %e, "suggestion failed");
                Err(e)
            }
        }
    }
}
