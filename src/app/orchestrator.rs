//! Main application orchestrator.
//!
//! 1. Initializes the run log unless quiet.
//! 2. Validates and loads the edge list.
//! 3. Counts paths, tracking signatures when asked to.
//! 4. Prints the count (and the distinct-signature count) and writes the
//!    optional path listing.

use std::path::Path;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};

const RUN_LOG: &str = "cave_paths.log";

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` when the edge list cannot be loaded, the search hits
/// an invariant violation, or the path listing cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(Path::new(RUN_LOG)) {
            // Keep going without the file log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                RUN_LOG, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", RUN_LOG);
        }
    }

    let result = run_search(&cli, quiet_mode);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of {}: {}", RUN_LOG, e);
        }
    }
    result
}

fn run_search(cli: &Cli, quiet_mode: bool) -> Result<(), AppError> {
    file_handler::validate_edge_file(&cli.edge_file, quiet_mode)?;
    verbose_println!(quiet_mode, "Processing File: {}", cli.edge_file.display());

    let mut cave = processing::load_cave_system(&cli.edge_file, cli.rule.into(), quiet_mode)?;
    let report = processing::search_paths(&mut cave, cli.tracks_paths(), quiet_mode)?;

    println!("{}", report.path_count);

    if let Some(paths) = &report.paths {
        // Sanity check: one distinct signature per counted path.
        println!("{}", paths.len());
        if let Some(out) = &cli.paths_out {
            file_handler::write_lines_to_file(out, paths)?;
            verbose_println!(quiet_mode, "[INFO] Paths written to {}", out.display());
        }
    }
    Ok(())
}
