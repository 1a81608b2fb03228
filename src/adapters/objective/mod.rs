//! Objective suggester adapters.

mod mock_suggester;
mod template_suggester;

pub use mock_suggester::MockSuggester;
pub use template_suggester::TemplateSuggester;
