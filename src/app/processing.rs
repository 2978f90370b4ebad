//! Loading the cave system and running the path search for the application.

use std::path::Path;

use super::error::AppError;
use super::verbose_println;
use crate::cave::{CaveKind, CaveSystem, VisitRule};
use crate::cave_loader;
use crate::path::{print_report_to_writer, PathCounter, SearchReport};

/// Loads the edge list at `edge_file` into a cave system.
pub fn load_cave_system(
    edge_file: &Path,
    rule: VisitRule,
    quiet_mode: bool,
) -> Result<CaveSystem, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading edge list...");
    let cave = cave_loader::load_cave_system_from_file(edge_file, rule)?;

    let large = cave
        .nodes()
        .iter()
        .filter(|n| n.kind() == CaveKind::Large)
        .count();
    verbose_println!(
        quiet_mode,
        "   => {} caves ({} large, {} small), {} passages.",
        cave.len(),
        large,
        cave.len() - large,
        cave.edge_count()
    );
    Ok(cave)
}

/// Runs the path search, optionally keeping every path signature.
pub fn search_paths(
    cave: &mut CaveSystem,
    track_paths: bool,
    quiet_mode: bool,
) -> Result<SearchReport, AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 2] Counting paths ({:?})...",
        cave.rule()
    );
    let mut counter = PathCounter::new(cave)?;
    if track_paths {
        counter = counter.with_path_log();
    }
    let report = counter.run()?;

    if !quiet_mode {
        let mut summary = Vec::new();
        print_report_to_writer(&report, &mut summary)?;
        for line in String::from_utf8_lossy(&summary).lines() {
            verbose_println!(quiet_mode, "   {}", line);
        }
    }
    Ok(report)
}
