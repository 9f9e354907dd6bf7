//! Pair command implementation.

use crate::cli::ChallengeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use influence_domain::CompletionProvider;

/// Execute the pair command.
pub async fn execute_pair<P>(
    args: ChallengeArgs,
    session: &Session<P>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Sync,
    P::Error: std::fmt::Display,
{
    let difficulty = args.difficulty.map(Into::into).unwrap_or_else(|| config.difficulty());
    let pair = session.pair(difficulty).await;

    println!("{}", formatter.format_pair(&pair, difficulty)?);
    Ok(())
}
