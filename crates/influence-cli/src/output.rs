//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use colored::*;
use influence_domain::{ConnectionPair, ConnectionPath, Difficulty};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a challenge pair.
    pub fn format_pair(&self, pair: &ConnectionPair, difficulty: Difficulty) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "person1": pair.person1(),
                "person2": pair.person2(),
                "difficulty": difficulty.as_str(),
                "chain_length": difficulty.band_label(),
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["From", "To", "Difficulty", "Typical chain"]);
                builder.push_record([
                    pair.person1().to_string(),
                    pair.person2().to_string(),
                    difficulty.to_string(),
                    format!("{} connections", difficulty.band_label()),
                ]);
                Ok(self.render(builder))
            }
            OutputFormat::Plain => Ok(format!("{}\n{}", pair.person1(), pair.person2())),
        }
    }

    /// Format a connection chain as a numbered list.
    pub fn format_path(&self, path: &ConnectionPath) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let chain: Vec<serde_json::Value> = path
                    .entries()
                    .iter()
                    .map(|entry| {
                        serde_json::json!({
                            "name": entry.name(),
                            "explanation": entry.explanation(),
                        })
                    })
                    .collect();

                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "chain": chain,
                    "links": path.link_count(),
                }))?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Person", "Connection"]);

                for (idx, entry) in path.entries().iter().enumerate() {
                    builder.push_record([
                        (idx + 1).to_string(),
                        entry.name().to_string(),
                        entry.explanation().unwrap_or("").to_string(),
                    ]);
                }

                Ok(self.render(builder))
            }
            OutputFormat::Plain => Ok(path
                .entries()
                .iter()
                .enumerate()
                .map(|(idx, entry)| format!("{}. {}", idx + 1, entry))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the effective configuration.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table | OutputFormat::Plain => config.to_toml(),
        }
    }

    /// Describe the chain length a player should aim for.
    pub fn chain_band(&self, difficulty: Difficulty) -> String {
        self.info(&format!(
            "Typical chain length for {}: {} connections",
            difficulty,
            difficulty.band_label()
        ))
    }

    /// Highlight a challenge pair in running text.
    pub fn challenge(&self, pair: &ConnectionPair) -> String {
        format!(
            "{} {} {}",
            self.colorize(pair.person1(), "cyan"),
            self.colorize("→", "magenta"),
            self.colorize(pair.person2(), "cyan")
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a CLI error for stderr.
    pub fn failure(&self, error: &CliError) -> String {
        self.error(&error.to_string())
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if colors are enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use influence_domain::ChainEntry;

    fn sample_pair() -> ConnectionPair {
        ConnectionPair::new("Ada Lovelace", "Alan Turing").unwrap()
    }

    fn sample_path() -> ConnectionPath {
        ConnectionPath::new(vec![
            ChainEntry::new("Ada Lovelace"),
            ChainEntry::with_explanation("Charles Babbage", "worked together"),
            ChainEntry::new("Alan Turing"),
        ])
        .unwrap()
    }

    #[test]
    fn test_pair_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_pair(&sample_pair(), Difficulty::Hard).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["person1"], "Ada Lovelace");
        assert_eq!(value["person2"], "Alan Turing");
        assert_eq!(value["difficulty"], "hard");
        assert_eq!(value["chain_length"], "5-7");
    }

    #[test]
    fn test_pair_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_pair(&sample_pair(), Difficulty::Easy).unwrap();
        assert!(output.contains("Ada Lovelace"));
        assert!(output.contains("Typical chain"));
        assert!(output.contains("2-4 connections"));
    }

    #[test]
    fn test_pair_plain() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_pair(&sample_pair(), Difficulty::Easy).unwrap();
        assert_eq!(output, "Ada Lovelace\nAlan Turing");
    }

    #[test]
    fn test_path_plain_is_numbered() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_path(&sample_path()).unwrap();
        assert_eq!(
            output,
            "1. Ada Lovelace\n2. Charles Babbage - worked together\n3. Alan Turing"
        );
    }

    #[test]
    fn test_path_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_path(&sample_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["links"], 2);
        assert_eq!(value["chain"][1]["explanation"], "worked together");
        assert!(value["chain"][0]["explanation"].is_null());
    }

    #[test]
    fn test_path_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_path(&sample_path()).unwrap();
        assert!(output.contains("Connection"));
        assert!(output.contains("Charles Babbage"));
        assert!(output.contains("worked together"));
    }

    #[test]
    fn test_config_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_config(&Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["settings"]["default_difficulty"], "medium");
    }

    #[test]
    fn test_chain_band() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(
            formatter.chain_band(Difficulty::Medium),
            "ℹ Typical chain length for medium: 3-5 connections"
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.challenge(&sample_pair()), "Ada Lovelace → Alan Turing");
    }
}
