//! Rank command handlers.

use super::args::OutputArgs;
use crate::config::Config;
use crate::exit::RankExit;
use crate::graph::{builder, Graph};
use crate::rank::RankEngine;
use crate::reporting::{self, RankReport};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Loads the config named on the command line, or `./pagerank.toml`.
///
/// # Errors
/// Returns error if the config cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from(p)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the link file cannot be loaded or ranking fails.
pub fn handle_rank(file: &Path, output: OutputArgs, config: &Config) -> Result<RankExit> {
    let mut graph = builder::load(file)?;
    info!(file = %file.display(), pages = graph.len(), "loaded link file");
    rank_and_report(&mut graph, output, config)
}

/// Handles the sample command.
///
/// In console mode the web is printed before and after ranking, so the
/// committed node ranks are visible.
///
/// # Errors
/// Returns error if ranking fails.
pub fn handle_sample(output: OutputArgs, config: &Config) -> Result<RankExit> {
    let mut graph = builder::sample();
    if output.json {
        return rank_and_report(&mut graph, output, config);
    }

    println!("{graph}");
    let exit = rank_and_report(&mut graph, output, config)?;
    println!("{graph}");
    Ok(exit)
}

fn rank_and_report(graph: &mut Graph, output: OutputArgs, config: &Config) -> Result<RankExit> {
    let engine = RankEngine::new(config.engine.clone());
    let outcome = engine.run(graph)?;
    let report = RankReport::new(graph, &outcome, output.top);

    if output.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report, &config.report);
    }

    Ok(RankExit::from(outcome.status))
}
