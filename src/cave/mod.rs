// graph module
mod graph;
// node module
mod node;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use graph::{CaveSystem, NeighborCursor};
pub use node::{CaveKind, CaveNode, NodeId, VisitRule, END, START};
