//! PredictX LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `predictx-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Gemini `generateContent` API
//!
//! # Examples
//!
//! ```
//! use predictx_llm::MockProvider;
//! use predictx_domain::traits::LlmProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new("HOME:45,DRAW:30,AWAY:25");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "HOME:45,DRAW:30,AWAY:25");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use predictx_domain::traits::LlmProvider;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure (includes timeouts)
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code returned by the service
        status: u16,
        /// Response body, for server-side logs only
        body: String,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider could not be constructed
    #[error("Provider configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LlmError::InvalidResponse(e.to_string())
        } else {
            LlmError::Communication(e.to_string())
        }
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured completions without making any network calls.
/// Clones share the same response table and call counter.
///
/// # Examples
///
/// ```
/// use predictx_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "HOME:50,DRAW:25,AWAY:25");
/// provider.add_error("prompt2");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<AtomicUsize>,
    fail_all: bool,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            fail_all: false,
        }
    }

    /// Create a provider whose every call fails with a communication error
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.lock_responses()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.lock_responses().insert(prompt.into(), MockReply::Failure);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockReply>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("HOME:40,DRAW:30,AWAY:30")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_all {
            return Err(LlmError::Communication("Mock failure".to_string()));
        }

        match self.lock_responses().get(prompt) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::Failure) => Err(LlmError::Communication("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}
