use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagerank", version, about = "Rank the pages of a link graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Read settings from FILE instead of ./pagerank.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the pages listed in a link file
    Rank {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Only show the N highest-ranked pages
        #[arg(long, short, value_name = "N")]
        top: Option<usize>,
    },
    /// Rank the built-in four-page sample web
    Sample {
        #[arg(long)]
        json: bool,
    },
}

/// Output options shared by the rank commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    pub json: bool,
    pub top: Option<usize>,
}
