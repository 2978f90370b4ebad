use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for loading a cave system from an edge list.
#[derive(Error, Debug)]
pub enum CaveLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a line is not of the form `a-b`.
    #[error("Malformed edge on line {line}: '{content}'")]
    MalformedEdge { line: usize, content: String },

    /// Error when an edge connects a cave to itself.
    #[error("Edge on line {line} connects '{name}' to itself")]
    SelfLoop { line: usize, name: String },

    /// Error when two large caves are joined, which allows endless paths.
    #[error("Edge on line {line} joins large caves '{first}' and '{second}'")]
    AdjacentLargeCaves {
        line: usize,
        first: String,
        second: String,
    },

    /// Error when the input holds no edges at all.
    #[error("No edges found in '{0}'")]
    NoEdgesFound(String),
}
