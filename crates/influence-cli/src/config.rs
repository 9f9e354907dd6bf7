//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use influence_domain::Difficulty;
use influence_engine::EngineConfig;
use influence_llm::chat::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion endpoint
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Parser and formatter limits
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Where completions come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Chat-completion URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Model name sent with each request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Give up on a completion after this many seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Difficulty used when none is given on the command line
    #[serde(default = "default_difficulty")]
    pub default_difficulty: String,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Bare text, one item per line
    Plain,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(influence_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the values that would otherwise surface as odd runtime behavior.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.url.trim().is_empty() {
            return Err(CliError::Config("endpoint.url must not be empty".into()));
        }
        if self.endpoint.timeout_secs == Some(0) {
            return Err(CliError::Config(
                "endpoint.timeout_secs must be greater than 0".into(),
            ));
        }
        if Difficulty::parse(&self.settings.default_difficulty).is_none() {
            return Err(CliError::Config(format!(
                "Unknown default_difficulty '{}' (expected easy, medium or hard)",
                self.settings.default_difficulty
            )));
        }
        self.engine.validate().map_err(CliError::Config)
    }

    /// The configured default difficulty.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_tag(&self.settings.default_difficulty)
    }

    /// The completion timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.endpoint.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: None,
            timeout_secs: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            default_difficulty: default_difficulty(),
            history_size: default_history_size(),
        }
    }
}

/// `~/.influence`, home of the config file and REPL history.
pub fn influence_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".influence"))
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_difficulty() -> String {
    Difficulty::Medium.as_str().to_string()
}

fn default_history_size() -> usize {
    1000
}
