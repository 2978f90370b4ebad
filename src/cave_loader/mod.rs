pub mod error;
mod loader;

pub use error::CaveLoaderError;
pub use loader::{build_cave_system, load_cave_system_from_file, parse_edges};
