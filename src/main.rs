//! ktmine CLI binary
//!
//! This is the main entry point for the ktmine command-line interface.
//! The CLI is a thin adapter over existing APIs - NO logic is implemented here.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = ktmine::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::init();
    }

    // Execute command
    let result = match cli.command {
        ktmine::cli::Commands::Mine { config, skip_clone } => execute_mine(&config, skip_clone),

        ktmine::cli::Commands::Eval {
            answers,
            predictions,
            output,
        } => execute_eval(&answers, &predictions, &output),
    };

    // Handle result
    match result {
        Ok(msg) => {
            println!("{}", msg);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Execute the mine command.
///
/// This function is a thin adapter that:
/// 1. Loads the run configuration
/// 2. Clones the corpus repository (fatal on failure)
/// 3. Creates the dataset file with its header
/// 4. Enumerates candidate files and runs the batch
///
/// All logic is delegated to existing APIs.
fn execute_mine(config_path: &Path, skip_clone: bool) -> Result<String, ktmine::MineError> {
    use ktmine::config::load_config;
    use ktmine::dataset::Dataset;
    use ktmine::discovery::collect_files;
    use ktmine::pipeline::run_batch;
    use ktmine::repo::clone_repository;

    // Step 1: Load configuration
    let config = load_config(config_path)?;

    // Step 2: Acquire the corpus
    if !skip_clone {
        clone_repository(&config.repository_url, &config.clone_to)?;
    }

    // Step 3: Create the dataset with its header row
    let dataset = Dataset::create(&config.dataset_name)?;

    // Step 4: Enumerate candidates and run the batch
    let files = collect_files(&config.clone_to, &config.extension)?;
    let summary = run_batch(&files, &dataset, config.timeout());

    // Step 5: Return the summary line
    Ok(summary.report())
}

/// Execute the eval command.
///
/// This function is a thin adapter that:
/// 1. Scores the prediction file against the answer file
/// 2. Writes per-sample results to the output JSON file
///
/// All logic is delegated to the eval module.
fn execute_eval(
    answers: &Path,
    predictions: &Path,
    output: &Path,
) -> Result<String, ktmine::MineError> {
    use ktmine::eval::{evaluate, write_results};

    let report = evaluate(answers, predictions)?;
    write_results(output, &report.results)?;

    Ok(report.summary())
}
