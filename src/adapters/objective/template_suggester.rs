//! Offline objective suggester.
//!
//! Produces a fixed SMART-shaped sentence around the competency named in
//! the prompt. Used by the reference server when no AI backend is wired.

use async_trait::async_trait;

use crate::ports::{ObjectiveSuggester, SuggestionError};

#[derive(Debug, Clone, Default)]
pub struct TemplateSuggester;

impl TemplateSuggester {
    pub fn new() -> Self {
        Self
    }
}

/// First double-quoted phrase of the prompt.
fn quoted_competency(prompt: &str) -> Option<&str> {
    let start = prompt.find('"')? + 1;
    let len = prompt[start..].find('"')?;
    let name = prompt[start..start + len].trim();
    (!name.is_empty()).then_some(name)
}

#[async_trait]
impl ObjectiveSuggester for TemplateSuggester {
    async fn suggest(&self, prompt: &str) -> Result<String, SuggestionError> {
        let competency = quoted_competency(prompt).ok_or_else(|| {
            SuggestionError::Malformed("prompt does not name a competency".to_string())
        })?;
        Ok(format!(
            "Within 12 weeks, apply {} in three realistic role scenarios and reach a High self-rating confirmed by a structured peer review.",
            competency.to_lowercase()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn names_the_quoted_competency() {
        let text = TemplateSuggester::new()
            .suggest("Generate one concise SMART objective for the competency \"Decision Making\" within ...")
            .await
            .unwrap();
        assert!(text.contains("apply decision making"));
    }

    #[tokio::test]
    async fn prompt_without_competency_is_malformed() {
        let err = TemplateSuggester::new().suggest("hello").await.unwrap_err();
        assert!(matches!(err, SuggestionError::Malformed(_)));
    }
}
