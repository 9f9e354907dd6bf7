//! Web of Influence Completion Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `influence-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic canned replies for testing
//! - `ChatCompletionProvider`: OpenAI-style chat-completion endpoint over HTTP
//!
//! Every failure of a provider is an [`LlmError`]. The game engine treats all
//! of them alike: it logs the error and serves a fallback value.
//!
//! # Examples
//!
//! ```
//! use influence_llm::MockProvider;
//! use influence_domain::CompletionProvider;
//!
//! # tokio_test_block(async {
//! let provider = MockProvider::new("Person1: Ada Lovelace\nPerson2: Alan Turing");
//! let reply = provider.complete("any prompt").await.unwrap();
//! assert!(reply.starts_with("Person1:"));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod chat;

use influence_domain::CompletionProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use chat::ChatCompletionProvider;

/// Errors that can occur while calling a completion endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network failure before any HTTP status was received
    #[error("Communication error: {0}")]
    Communication(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// The response body did not carry `choices[0].message.content`
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. Replies
/// are looked up by the exact prompt first, then by the first registered
/// fragment the prompt contains, and finally the default reply is used.
///
/// # Examples
///
/// ```
/// use influence_llm::MockProvider;
///
/// let mut provider = MockProvider::new("fallback reply");
/// provider.add_response("exact prompt", "exact reply");
/// provider.add_response_containing("chain of connections", "1. Alice\n2. Bob");
/// provider.add_error("broken prompt");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    fragments: Arc<Mutex<Vec<(String, String)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<bool>>,
}

const MOCK_ERROR: &str = "ERROR";

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            fragments: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a provider that fails every call, like an unreachable endpoint
    pub fn failing() -> Self {
        let provider = Self::default();
        *lock(&provider.failing) = true;
        provider
    }

    /// Add a specific reply for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), response.into());
    }

    /// Add a reply for any prompt containing `fragment`
    pub fn add_response_containing(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        lock(&self.fragments).push((fragment.into(), response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MOCK_ERROR.to_string());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Every prompt received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Reset the recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }

    fn reply_for(&self, prompt: &str) -> Result<String, LlmError> {
        lock(&self.prompts).push(prompt.to_string());

        if *lock(&self.failing) {
            return Err(LlmError::Communication("Mock endpoint unreachable".to_string()));
        }

        let response = lock(&self.responses).get(prompt).cloned().or_else(|| {
            lock(&self.fragments)
                .iter()
                .find(|(fragment, _)| prompt.contains(fragment.as_str()))
                .map(|(_, response)| response.clone())
        });

        match response {
            Some(response) if response == MOCK_ERROR => Err(LlmError::Other("Mock error".to_string())),
            Some(response) => Ok(response),
            None => Ok(self.default_response.clone()),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        self.reply_for(prompt)
    }
}

// A poisoned mock is still usable: the data is plain strings.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("hello").await.unwrap(), "world");
        assert_eq!(provider.complete("foo").await.unwrap(), "bar");
        assert_eq!(provider.complete("unknown").await.unwrap(), "Default mock response");
    }

    #[tokio::test]
    async fn test_mock_provider_fragment_responses() {
        let mut provider = MockProvider::default();
        provider.add_response_containing("two real people", "Person1: A\nPerson2: B");

        let reply = provider.complete("Please give me two real people (full names)").await.unwrap();
        assert_eq!(reply, "Person1: A\nPerson2: B");
    }

    #[tokio::test]
    async fn test_exact_response_wins_over_fragment() {
        let mut provider = MockProvider::default();
        provider.add_response_containing("prompt", "fragment");
        provider.add_response("the prompt", "exact");

        assert_eq!(provider.complete("the prompt").await.unwrap(), "exact");
        assert_eq!(provider.complete("another prompt").await.unwrap(), "fragment");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.complete("prompt1").await.unwrap();
        provider.complete("prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete("bad prompt").await;
        assert!(matches!(result, Err(LlmError::Other(_))));
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let provider = MockProvider::failing();
        let result = provider.complete("anything").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("test").await.unwrap();

        // Both should share the same history due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_status_error_display() {
        let err = LlmError::Status {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: busy");
    }
}
