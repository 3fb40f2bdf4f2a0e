//! Mock LLM provider for tests and offline development

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// What the mock answers with
#[derive(Debug, Clone)]
enum MockBehavior {
    Respond(String),
    Fail(String),
}

/// Mock LLM provider
///
/// Answers every call with a canned response (or a canned failure) and keeps
/// track of how many calls were made and what the last prompt was.
pub struct MockProvider {
    behavior: MockBehavior,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<LLMRequest>>,
}

impl MockProvider {
    /// Create a mock that answers with a small valid deployment document
    pub fn new() -> Self {
        Self::with_response("version: 1.0\nservices:\n  app:\n    compute:\n      instance: basic")
    }

    /// Create with a custom response
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::from_behavior(MockBehavior::Respond(response.into()))
    }

    /// Create a mock whose every call fails as an upstream API error
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_behavior(MockBehavior::Fail(message.into()))
    }

    /// Sleep before answering, to exercise caller-side timeouts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<LLMRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    fn from_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            MockBehavior::Respond(content) => Ok(LLMResponse::new(content.clone(), request.model)
                .with_tokens(10)
                .with_finish_reason("STOP")),
            MockBehavior::Fail(message) => Err(LLMError::ApiCallFailed(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
