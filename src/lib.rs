//! Counts the paths from `start` to `end` through a graph of caves, where
//! large caves may be revisited freely and small caves are limited to one
//! visit (or, under the relaxed rule, one small cave per path to two).

pub mod app;
pub mod cave;
pub mod cave_loader;
pub mod logging;
pub mod path;

pub use cave::{CaveSystem, VisitRule};
pub use path::{count_paths, PathCounter, PathError};
