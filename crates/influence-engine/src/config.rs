//! Configuration for the game engine

use crate::format::ExplanationLimits;
use serde::{Deserialize, Serialize};

/// Configuration for the game engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Replies longer than this (characters) are cut before parsing
    #[serde(default = "default_max_reply_chars")]
    pub max_reply_chars: usize,

    /// Soft cap on an explanation's length (characters)
    #[serde(default = "default_max_explanation_chars")]
    pub max_explanation_chars: usize,

    /// Hard cap on an explanation's length (words)
    #[serde(default = "default_max_explanation_words")]
    pub max_explanation_words: usize,
}

fn default_max_reply_chars() -> usize {
    8_000
}

fn default_max_explanation_chars() -> usize {
    ExplanationLimits::default().max_chars
}

fn default_max_explanation_words() -> usize {
    ExplanationLimits::default().max_words
}

impl EngineConfig {
    /// The explanation caps as used by the path parser
    pub fn explanation_limits(&self) -> ExplanationLimits {
        ExplanationLimits {
            max_chars: self.max_explanation_chars,
            max_words: self.max_explanation_words,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_reply_chars == 0 {
            return Err("max_reply_chars must be greater than 0".to_string());
        }
        if self.max_explanation_chars == 0 {
            return Err("max_explanation_chars must be greater than 0".to_string());
        }
        if self.max_explanation_words == 0 {
            return Err("max_explanation_words must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_reply_chars: default_max_reply_chars(),
            max_explanation_chars: default_max_explanation_chars(),
            max_explanation_words: default_max_explanation_words(),
        }
    }
}
