//! Path command implementation.

use crate::cli::PathArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use influence_domain::{CompletionProvider, ConnectionPair};

/// Execute the path command.
pub async fn execute_path<P>(
    args: PathArgs,
    session: &Session<P>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    let pair = ConnectionPair::new(args.person1, args.person2)
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let difficulty = args.difficulty.map(Into::into).unwrap_or_else(|| config.difficulty());

    let path = session.path(pair.person1(), pair.person2(), difficulty).await;

    println!("{}", formatter.format_path(&path)?);
    Ok(())
}
