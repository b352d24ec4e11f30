//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Commands, OutputArgs};
use super::handlers::{handle_rank, handle_sample, load_config};
use crate::exit::RankExit;
use anyhow::Result;
use std::path::Path;

/// Executes the parsed command, reading config from `config_path` if given.
///
/// # Errors
/// Returns error if the config cannot be loaded or the command handler fails.
pub fn execute(command: &Commands, config_path: Option<&Path>) -> Result<RankExit> {
    let config = load_config(config_path)?;

    match command {
        Commands::Rank { file, json, top } => handle_rank(
            file,
            OutputArgs {
                json: *json,
                top: *top,
            },
            &config,
        ),
        Commands::Sample { json } => handle_sample(
            OutputArgs {
                json: *json,
                top: None,
            },
            &config,
        ),
    }
}
