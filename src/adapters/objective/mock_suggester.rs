//! Mock objective suggester for testing.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delay to hold a request in flight
//! - Error injection
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ObjectiveSuggester, SuggestionError};

const DEFAULT_TEXT: &str = "Mock objective";

#[derive(Debug, Clone, Default)]
pub struct MockSuggester {
    responses: Arc<Mutex<VecDeque<Result<String, SuggestionError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl MockSuggester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful suggestion.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        locked(&self.responses).push_back(Ok(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: SuggestionError) -> Self {
        locked(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        locked(&self.calls).clone()
    }

    fn next_response(&self) -> Result<String, SuggestionError> {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_TEXT.to_string()))
    }
}

#[async_trait]
impl ObjectiveSuggester for MockSuggester {
    async fn suggest(&self, prompt: &str) -> Result<String, SuggestionError> {
        locked(&self.calls).push(prompt.to_string());
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.next_response()
    }
}
