//! Trait definitions for external interactions
//!
//! These traits define the boundary between the game logic and the remote
//! text-completion service. Implementations live in `influence-llm`.

use std::future::Future;

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (influence-llm). A provider sends
/// one prompt and returns the raw, untrusted reply text. It performs no
/// retries; callers decide what to do with a failure.
pub trait CompletionProvider {
    /// Error type for completion calls
    type Error;

    /// Send `prompt` as the sole user message and return the reply text
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
