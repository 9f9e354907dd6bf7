//! Chat-completion Provider Implementation
//!
//! Talks to an OpenAI-style `/chat/completions` endpoint. The prompt is sent
//! as the only user message and the first choice's message content is
//! returned verbatim.
//!
//! There is no retry loop and no client-side timeout: a single
//! failed attempt is reported to the caller, who serves a fallback. Pass a
//! preconfigured client through [`ChatCompletionProvider::with_client`] to
//! impose transport limits.
//!
//! # Examples
//!
//! ```no_run
//! use influence_llm::ChatCompletionProvider;
//!
//! let provider = ChatCompletionProvider::default_endpoint();
//! let provider = ChatCompletionProvider::new("http://localhost:1234/v1/chat/completions")
//!     .with_model("local-model");
//! ```

use crate::LlmError;
use influence_domain::CompletionProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://ai.hackclub.com/chat/completions";

/// Provider for OpenAI-style chat-completion endpoints
#[derive(Debug, Clone)]
pub struct ChatCompletionProvider {
    endpoint: String,
    model: Option<String>,
    client: reqwest::Client,
}

/// Request body for the chat-completion API
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completion API
///
/// Every level is optional so that a malformed envelope becomes an
/// `InvalidResponse` rather than a decode error.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionProvider {
    /// Create a new provider for `endpoint`
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Full URL of the chat-completion route
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: None,
            client: reqwest::Client::new(),
        }
    }

    /// Create a provider for [`DEFAULT_ENDPOINT`]
    pub fn default_endpoint() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Request a specific model; omitted from the body when unset
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The endpoint this provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The requested model, if any
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Send one prompt and return the first choice's content
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached (`Communication`)
    /// - The status is not 2xx (`Status`)
    /// - The body is not JSON or lacks `choices[0].message.content` (`InvalidResponse`)
    pub async fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: self.model.as_deref(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("POST {} ({} prompt chars)", self.endpoint, prompt.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        first_choice_content(chat_response)
    }
}

fn first_choice_content(response: ChatResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            LlmError::InvalidResponse("Missing choices[0].message.content".to_string())
        })
}

impl CompletionProvider for ChatCompletionProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        self.send(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<String, LlmError> {
        first_choice_content(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_provider_creation() {
        let provider = ChatCompletionProvider::new("http://localhost:1234/v1/chat/completions");
        assert_eq!(provider.endpoint(), "http://localhost:1234/v1/chat/completions");
        assert_eq!(provider.model(), None);
    }

    #[test]
    fn test_default_endpoint() {
        let provider = ChatCompletionProvider::default_endpoint().with_model("llama3");
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), Some("llama3"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: None,
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "messages": [{ "role": "user", "content": "hi" }] })
        );

        let request = ChatRequest {
            model: Some("m"),
            messages: vec![],
        };
        assert_eq!(serde_json::to_value(&request).unwrap()["model"], "m");
    }

    #[test]
    fn test_first_choice_content() {
        let content = decode(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "first" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        }));
        assert_eq!(content.unwrap(), "first");
    }

    #[test]
    fn test_missing_choices_is_invalid() {
        assert!(matches!(decode(json!({ "id": "x" })), Err(LlmError::InvalidResponse(_))));
        assert!(matches!(decode(json!({ "choices": [] })), Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_null_content_is_invalid() {
        let result = decode(json!({ "choices": [{ "message": { "content": null } }] }));
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));

        let result = decode(json!({ "choices": [{ "finish_reason": "length" }] }));
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // Port out of range: the request never leaves the client
        let provider = ChatCompletionProvider::new("http://localhost:99999/chat/completions");

        let result = provider.complete("test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
