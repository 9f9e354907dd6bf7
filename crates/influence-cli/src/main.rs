//! Web of Influence - command-line game connecting famous people.

use clap::Parser;
use influence_cli::commands;
use influence_cli::repl;
use influence_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> influence_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };

    let mut config = Config::load_from(&config_path)?;

    if let Some(endpoint) = cli.endpoint {
        config.endpoint.url = endpoint;
    }
    if let Some(model) = cli.model {
        config.endpoint.model = Some(model);
    }
    config.validate()?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Rules) => commands::execute_rules(&formatter)?,
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        Some(Command::Pair(args)) => {
            let session = Session::from_config(&config);
            commands::execute_pair(args, &session, &config, &formatter).await?;
        }
        Some(Command::Path(args)) => {
            let session = Session::from_config(&config);
            commands::execute_path(args, &session, &config, &formatter).await?;
        }
        Some(Command::Play(args)) => {
            let session = Session::from_config(&config);
            let difficulty = args.difficulty.map(Into::into).unwrap_or_else(|| config.difficulty());
            repl::run_play(difficulty, &session, &config, &formatter).await?;
        }
        None => {
            let session = Session::from_config(&config);
            repl::run_play(config.difficulty(), &session, &config, &formatter).await?;
        }
    }

    Ok(())
}
