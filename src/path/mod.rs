// error module
mod error;
// explorer module
mod explorer;

// reachability module
pub mod reachability;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use explorer::{count_paths, print_report_to_writer, PathCounter, SearchReport, SearchStats};
pub use reachability::path_exists_to;
