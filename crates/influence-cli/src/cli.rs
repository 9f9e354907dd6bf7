//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use influence_domain::Difficulty;
use std::path::PathBuf;

/// Web of Influence - connect two famous people through a chain of acquaintances.
#[derive(Debug, Parser)]
#[command(name = "influence")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Chat-completion endpoint URL
    #[arg(long, global = true, env = "INFLUENCE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Model name sent to the endpoint
    #[arg(long, global = true, env = "INFLUENCE_MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Plain text, one item per line
    Plain,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Plain => OutputFormat::Plain,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a challenge pair
    Pair(ChallengeArgs),

    /// Print a sample chain between two people
    Path(PathArgs),

    /// Play interactive rounds (default)
    Play(ChallengeArgs),

    /// Explain how to play
    Rules,

    /// Inspect or write the configuration file
    Config(ConfigArgs),
}

/// Difficulty options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DifficultyArg {
    /// Household names, short chains
    Easy,
    /// Well-known people from different fields
    Medium,
    /// Different eras and fields, long chains
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Arguments for the pair and play commands.
#[derive(Debug, Default, Parser)]
pub struct ChallengeArgs {
    /// Difficulty level (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,
}

/// Arguments for the path command.
#[derive(Debug, Parser)]
pub struct PathArgs {
    /// Where the chain starts
    pub person1: String,

    /// Where the chain ends
    pub person2: String,

    /// Difficulty level (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["influence"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_pair_with_difficulty() {
        let cli = Cli::parse_from(["influence", "pair", "--difficulty", "hard"]);
        match cli.command {
            Some(Command::Pair(args)) => assert_eq!(args.difficulty, Some(DifficultyArg::Hard)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_path_positionals() {
        let cli = Cli::parse_from(["influence", "path", "Albert Einstein", "Barack Obama", "-d", "easy"]);
        match cli.command {
            Some(Command::Path(args)) => {
                assert_eq!(args.person1, "Albert Einstein");
                assert_eq!(args.person2, "Barack Obama");
                assert_eq!(args.difficulty, Some(DifficultyArg::Easy));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_path_requires_two_people() {
        assert!(Cli::try_parse_from(["influence", "path", "Albert Einstein"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["influence", "rules", "--format", "json", "--no-color", "-v"]);
        assert!(matches!(cli.command, Some(Command::Rules)));
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_endpoint_and_model_flags() {
        let cli = Cli::parse_from([
            "influence",
            "--endpoint",
            "http://localhost:9000/chat",
            "--model",
            "tiny",
            "pair",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/chat"));
        assert_eq!(cli.model.as_deref(), Some("tiny"));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["influence", "config", "init", "--force"]);
        match cli.command {
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            })) => assert!(force),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["influence", "pair", "-d", "nightmare"]).is_err());
    }

    #[test]
    fn test_difficulty_conversion() {
        assert_eq!(Difficulty::from(DifficultyArg::Easy), Difficulty::Easy);
        assert_eq!(Difficulty::from(DifficultyArg::Hard), Difficulty::Hard);
        assert_eq!(OutputFormat::from(CliFormat::Plain), OutputFormat::Plain);
    }
}
