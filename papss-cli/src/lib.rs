//! Command-line interface for PapssImmo town recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;
pub mod report;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

/// Run the PapssImmo CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// validation or writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "papss",
    about = "Rank Île-de-France towns for a home buyer",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank towns against a budget, surface, commute and priorities.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
