use thiserror::Error;

// Error type for cave traversal and path counting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A node was visited while its visit rule forbids it.
    #[error("Attempted to visit non visitable node '{name}'")]
    InvalidVisit { name: String },

    /// A node was unvisited while its visit count was already zero.
    #[error("Attempted to unvisit node '{name}' but it was already unvisited")]
    InvalidUnvisit { name: String },

    /// The graph has no `start` or no `end` node.
    #[error("Cave system has no '{0}' node")]
    MissingEndpoint(&'static str),

    /// The same path signature was recorded twice.
    #[error("Attempted to add path {0} for a second time")]
    DuplicatePath(String),
}
