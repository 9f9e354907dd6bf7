//! Interactive play mode.

use crate::commands::rules;
use crate::config::{influence_dir, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use influence_domain::{CompletionProvider, ConnectionPair, ConnectionPath, Difficulty};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// One challenge and what the player has seen of it so far.
struct Round {
    difficulty: Difficulty,
    pair: ConnectionPair,
    revealed: bool,
    example: Option<ConnectionPath>,
}

/// Play command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    GotIt,
    Example,
    New,
    Difficulty(Difficulty),
    Rules,
    Help,
    Quit,
}

/// Run interactive rounds until the player quits.
pub async fn run_play<P>(
    difficulty: Difficulty,
    session: &Session<P>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    println!(
        "{}",
        formatter.info("Web of Influence - type 'rules' to learn the game, 'quit' to leave")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut round = new_round(difficulty, session, formatter).await;

    loop {
        match editor.readline(&format!("influence ({})> ", round.difficulty)) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_play_command(line) {
                    Ok(PlayCommand::Quit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(PlayCommand::Help) => print_help(formatter),
                    Ok(PlayCommand::Rules) => match rules::render(formatter) {
                        Ok(text) => println!("{}", text),
                        Err(e) => eprintln!("{}", formatter.failure(&e)),
                    },
                    Ok(PlayCommand::GotIt) => {
                        round.revealed = true;
                        println!("{}", formatter.chain_band(round.difficulty));
                        println!(
                            "{}",
                            formatter.info("Type 'example' to see a sample chain or 'new' for another pair")
                        );
                    }
                    Ok(PlayCommand::Example) => {
                        if !round.revealed {
                            println!(
                                "{}",
                                formatter.warning("Find your own chain first, then type 'got it'")
                            );
                            continue;
                        }
                        if let Err(e) = show_example(&mut round, session, formatter).await {
                            eprintln!("{}", formatter.failure(&e));
                        }
                    }
                    Ok(PlayCommand::New) => {
                        round = new_round(round.difficulty, session, formatter).await;
                    }
                    Ok(PlayCommand::Difficulty(difficulty)) => {
                        round = new_round(difficulty, session, formatter).await;
                    }
                    Err(e) => eprintln!("{}", formatter.failure(&e)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'quit' to leave"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Fetch a pair and announce the challenge.
async fn new_round<P>(difficulty: Difficulty, session: &Session<P>, formatter: &Formatter) -> Round
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    println!("{}", formatter.info(&format!("Finding a {} challenge...", difficulty)));
    let pair = session.pair(difficulty).await;

    println!();
    println!("Connect {}", formatter.challenge(&pair));
    println!(
        "{}",
        formatter.info("Build a chain of people who have met, then type 'got it'")
    );

    Round {
        difficulty,
        pair,
        revealed: false,
        example: None,
    }
}

/// Print the round's sample chain, fetching it on first use.
async fn show_example<P>(round: &mut Round, session: &Session<P>, formatter: &Formatter) -> Result<()>
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    if round.example.is_none() {
        println!("{}", formatter.info("Looking up a sample chain..."));
        let path = session
            .path(round.pair.person1(), round.pair.person2(), round.difficulty)
            .await;
        round.example = Some(path);
    }

    if let Some(path) = &round.example {
        println!("{}", formatter.format_path(path)?);
    }
    Ok(())
}

/// Parse a play-mode line.
fn parse_play_command(line: &str) -> Result<PlayCommand> {
    let normalized = line.trim().to_lowercase();
    let parts: Vec<&str> = normalized.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts.as_slice() {
        ["got", "it"] | ["gotit"] | ["g"] | ["done"] => Ok(PlayCommand::GotIt),
        ["example"] | ["e"] | ["show"] => Ok(PlayCommand::Example),
        ["new"] | ["n"] | ["next"] => Ok(PlayCommand::New),
        ["difficulty" | "d", tag] => Difficulty::parse(tag)
            .map(PlayCommand::Difficulty)
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown difficulty: {}. Choose easy, medium or hard.",
                    tag
                ))
            }),
        ["difficulty" | "d"] => Err(CliError::InvalidInput(
            "Usage: difficulty <easy|medium|hard>".to_string(),
        )),
        ["rules"] => Ok(PlayCommand::Rules),
        ["help"] | ["?"] => Ok(PlayCommand::Help),
        ["quit"] | ["exit"] | ["q"] => Ok(PlayCommand::Quit),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            line.trim()
        ))),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = influence_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  got it, g                - Reveal the typical chain length");
    println!("  example, e               - Show a sample chain (after 'got it')");
    println!("  new, n                   - New pair at the same difficulty");
    println!("  difficulty <d>, d <d>    - Switch to easy, medium or hard");
    println!("  rules                    - How to play");
    println!("  help, ?                  - Show this help");
    println!("  quit, exit, q            - Leave the game");
    println!();
}
