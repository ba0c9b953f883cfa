//! Command-line interface for ktmine.
//!
//! This module handles argument parsing and user interface only.
//! NO mining or scoring logic is implemented here.

use clap::Parser;
use std::path::PathBuf;

/// ktmine: mine Kotlin functions into a completion dataset.
#[derive(Parser, Debug)]
#[command(name = "ktmine")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available ktmine commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Clone a repository and mine its functions into a CSV dataset.
    Mine {
        /// Path to the JSON run configuration.
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Reuse an existing checkout instead of cloning.
        #[arg(long)]
        skip_clone: bool,
    },

    /// Score predicted completions against reference answers.
    Eval {
        /// File of reference answers, one sample per line.
        #[arg(short, long)]
        answers: PathBuf,

        /// File of predictions, line-aligned with the answers.
        #[arg(short, long)]
        predictions: PathBuf,

        /// Where to write per-sample scores as JSON.
        #[arg(short, long, default_value = "results.json")]
        output: PathBuf,
    },
}

/// Parse command-line arguments.
///
/// This function is the entry point for CLI argument parsing.
/// It returns the parsed Cli struct or exits on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}
