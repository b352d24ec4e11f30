use clap::Parser;
use colored::Colorize;
use pagerank_core::cli::{self, Cli};
use pagerank_core::exit::RankExit;
use tracing_subscriber::EnvFilter;

fn main() -> RankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = &cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return RankExit::Success;
    };

    match cli::dispatch::execute(command, cli.config.as_deref()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            RankExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "pagerank_core=debug"
        } else {
            "pagerank_core=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
