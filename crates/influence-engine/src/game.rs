//! The two game pipelines: challenge pair and sample connection

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::fallback::{fallback_pair, fallback_path};
use crate::pair_parser::parse_connection_pair;
use crate::path_parser::extract_connection_path;
use crate::prompt::{PairPromptBuilder, PathPromptBuilder};
use influence_domain::{CompletionProvider, ConnectionPair, ConnectionPath, Difficulty};
use tracing::{debug, info, warn};

/// Runs the pair and path pipelines against a completion provider
///
/// `connection_pair` and `sample_connection` never fail: transport and parse
/// errors are logged and replaced by deterministic fallbacks. The `try_`
/// variants expose the underlying error instead.
pub struct Game<P> {
    provider: P,
    config: EngineConfig,
}

impl<P> Game<P>
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    /// Create a new Game with the default configuration
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, EngineConfig::default())
    }

    /// Create a new Game with a specific configuration
    pub fn with_config(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// The completion provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get a challenge pair, falling back to the difficulty's fixed pair
    pub async fn connection_pair(&self, difficulty: Difficulty) -> ConnectionPair {
        match self.try_connection_pair(difficulty).await {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Error fetching connection pair ({}): {}; using fallback", difficulty, e);
                fallback_pair(difficulty)
            }
        }
    }

    /// Get a challenge pair from the provider
    pub async fn try_connection_pair(
        &self,
        difficulty: Difficulty,
    ) -> Result<ConnectionPair, EngineError> {
        info!("Requesting {} connection pair", difficulty);

        let prompt = PairPromptBuilder::new(difficulty).build();
        let reply = self.call(&prompt).await?;
        let pair = parse_connection_pair(&reply)?;

        info!("Connection pair: {}", pair);
        Ok(pair)
    }

    /// Get an example chain, falling back to a synthesized one
    pub async fn sample_connection(
        &self,
        person1: &str,
        person2: &str,
        difficulty: Difficulty,
    ) -> ConnectionPath {
        match self.try_sample_connection(person1, person2, difficulty).await {
            Ok(path) => path,
            Err(e) => {
                warn!("Error fetching sample connection ({}): {}; using fallback", difficulty, e);
                fallback_path(person1, person2, difficulty)
            }
        }
    }

    /// Get an example chain for the two people of `pair`
    pub async fn sample_connection_for(
        &self,
        pair: &ConnectionPair,
        difficulty: Difficulty,
    ) -> ConnectionPath {
        self.sample_connection(pair.person1(), pair.person2(), difficulty)
            .await
    }

    /// Get an example chain from the provider
    pub async fn try_sample_connection(
        &self,
        person1: &str,
        person2: &str,
        difficulty: Difficulty,
    ) -> Result<ConnectionPath, EngineError> {
        info!("Requesting {} connection path: {} → {}", difficulty, person1, person2);

        let prompt = PathPromptBuilder::new(person1, person2, difficulty).build();
        let reply = self.call(&prompt).await?;
        let path = extract_connection_path(
            &reply,
            person1,
            person2,
            &self.config.explanation_limits(),
        )?;

        info!("Connection path with {} links", path.link_count());
        Ok(path)
    }

    /// One completion call, reply capped at `max_reply_chars`
    async fn call(&self, prompt: &str) -> Result<String, EngineError> {
        debug!("Prompt length: {} chars", prompt.len());

        let reply = self
            .provider
            .complete(prompt)
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        debug!("Reply length: {} chars", reply.len());

        Ok(cap_chars(reply, self.config.max_reply_chars))
    }
}

fn cap_chars(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        debug!("Reply truncated to {} chars", max_chars);
        text.truncate(idx);
    }
    text
}
