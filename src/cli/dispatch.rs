//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{handle_config, handle_rank, handle_stats};
use crate::exit::LinkRankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<LinkRankExit> {
    match command {
        Commands::Rank(args) => handle_rank(&args),
        Commands::Stats {
            input,
            config,
            json,
        } => handle_stats(input, config.as_deref(), json),
        Commands::Config { config } => handle_config(config.as_deref()),
    }
}
