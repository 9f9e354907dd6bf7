//! A game bound to the configured endpoint and time limit.

use crate::config::Config;
use influence_domain::{CompletionProvider, ConnectionPair, ConnectionPath, Difficulty};
use influence_engine::{fallback_pair, fallback_path, Game};
use influence_llm::ChatCompletionProvider;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Runs the engine pipelines, giving up on slow completions.
///
/// A completion that outlives the time limit is treated like any other
/// failure: the caller gets the fallback value.
pub struct Session<P> {
    game: Game<P>,
    time_limit: Option<Duration>,
}

impl Session<ChatCompletionProvider> {
    /// Build a session for the endpoint described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut provider = ChatCompletionProvider::new(config.endpoint.url.clone());
        if let Some(model) = &config.endpoint.model {
            provider = provider.with_model(model.clone());
        }
        Self::new(Game::with_config(provider, config.engine.clone()), config.timeout())
    }
}

impl<P> Session<P>
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    /// Wrap an engine with an optional time limit per completion.
    pub fn new(game: Game<P>, time_limit: Option<Duration>) -> Self {
        Self { game, time_limit }
    }

    /// The wrapped engine.
    pub fn game(&self) -> &Game<P> {
        &self.game
    }

    /// Get a challenge pair.
    pub async fn pair(&self, difficulty: Difficulty) -> ConnectionPair {
        let request = self.game.connection_pair(difficulty);
        match self.time_limit {
            None => request.await,
            Some(limit) => match timeout(limit, request).await {
                Ok(pair) => pair,
                Err(_) => {
                    warn!("Connection pair timed out after {:?}; using fallback", limit);
                    fallback_pair(difficulty)
                }
            },
        }
    }

    /// Get a sample chain between two people.
    pub async fn path(&self, person1: &str, person2: &str, difficulty: Difficulty) -> ConnectionPath {
        let request = self.game.sample_connection(person1, person2, difficulty);
        match self.time_limit {
            None => request.await,
            Some(limit) => match timeout(limit, request).await {
                Ok(path) => path,
                Err(_) => {
                    warn!("Sample connection timed out after {:?}; using fallback", limit);
                    fallback_path(person1, person2, difficulty)
                }
            },
        }
    }
}
