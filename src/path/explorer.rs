use std::collections::HashSet;
use std::io::Write;

use tracing::{debug, trace};

use super::error::PathError;
use super::reachability::path_exists_to;
use crate::cave::{CaveSystem, NeighborCursor, NodeId, END, START};

/// Work counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered by the depth-first walk, pruned ones included.
    pub nodes_entered: u64,
    /// Branches abandoned because `end` was no longer reachable.
    pub branches_pruned: u64,
    /// Calls made to the reachability check.
    pub reachability_checks: u64,
}

/// Outcome of one `PathCounter::run`.
#[derive(Clone, Debug, Default)]
pub struct SearchReport {
    pub path_count: u64,
    pub stats: SearchStats,
    /// Signatures of every completed path in discovery order, when the
    /// path log was enabled.
    pub paths: Option<Vec<String>>,
}

/// Records path signatures and rejects repeats.
#[derive(Debug, Default)]
struct PathLog {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl PathLog {
    fn record(&mut self, signature: String) -> Result<(), PathError> {
        if !self.seen.insert(signature.clone()) {
            return Err(PathError::DuplicatePath(signature));
        }
        self.ordered.push(signature);
        Ok(())
    }
}

/// Counts the distinct paths from `start` to `end` through a `CaveSystem`.
///
/// The walk is a depth-first search driven by an explicit frame stack.
/// Each frame holds the node it entered and a cursor into that node's
/// neighbors; popping a frame undoes its visit, except for `start`, which
/// stays visited once the search is over.
pub struct PathCounter<'a> {
    cave: &'a mut CaveSystem,
    end: NodeId,
    count: u64,
    stats: SearchStats,
    log: Option<PathLog>,
}

impl<'a> PathCounter<'a> {
    pub fn new(cave: &'a mut CaveSystem) -> Result<Self, PathError> {
        let end = cave.end().ok_or(PathError::MissingEndpoint(END))?;
        Ok(Self {
            cave,
            end,
            count: 0,
            stats: SearchStats::default(),
            log: None,
        })
    }

    /// Keeps the signature of every completed path and fails on repeats.
    pub fn with_path_log(mut self) -> Self {
        self.log = Some(PathLog::default());
        self
    }

    /// Runs the search to completion.
    pub fn run(mut self) -> Result<SearchReport, PathError> {
        let start = self.cave.start().ok_or(PathError::MissingEndpoint(START))?;

        debug!(
            nodes = self.cave.len(),
            edges = self.cave.edge_count(),
            rule = ?self.cave.rule(),
            "starting path search"
        );

        if self.reachable(start) {
            self.search(start)?;
        } else {
            debug!("end is unreachable from start");
        }

        debug!(
            paths = self.count,
            entered = self.stats.nodes_entered,
            pruned = self.stats.branches_pruned,
            checks = self.stats.reachability_checks,
            "path search finished"
        );

        Ok(SearchReport {
            path_count: self.count,
            stats: self.stats,
            paths: self.log.map(|log| log.ordered),
        })
    }

    fn search(&mut self, start: NodeId) -> Result<(), PathError> {
        if !self.enter(start)? {
            return Ok(());
        }
        let mut frames = vec![NeighborCursor::new(start)];

        while let Some(frame) = frames.last_mut() {
            let current = frame.node();
            match self.cave.next_visitable_neighbor(frame) {
                Some(neighbor) if neighbor == self.end => self.add_path()?,
                Some(neighbor) => {
                    if self.enter(neighbor)? {
                        frames.push(NeighborCursor::new(neighbor));
                    }
                }
                None => {
                    frames.pop();
                    if current != start {
                        self.cave.unvisit(current)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Visits `node` and reports whether its sub-tree is worth exploring.
    /// A small cave from which `end` can no longer be reached is left again
    /// straight away. Large caves skip the check.
    fn enter(&mut self, node: NodeId) -> Result<bool, PathError> {
        self.cave.visit(node)?;
        self.stats.nodes_entered += 1;

        let revisitable = self
            .cave
            .node(node)
            .map(|n| n.is_revisitable())
            .unwrap_or(false);
        if !revisitable && !self.reachable(node) {
            trace!(node, depth = self.cave.visit_stack().len(), "pruned branch");
            self.stats.branches_pruned += 1;
            self.cave.unvisit(node)?;
            return Ok(false);
        }
        Ok(true)
    }

    fn reachable(&mut self, from: NodeId) -> bool {
        self.stats.reachability_checks += 1;
        path_exists_to(self.cave, from, self.end)
    }

    fn add_path(&mut self) -> Result<(), PathError> {
        self.count += 1;
        if let Some(log) = self.log.as_mut() {
            log.record(self.cave.path_signature())?;
        }
        Ok(())
    }
}

/// Counts every path from `start` to `end` under the cave system's rule.
pub fn count_paths(cave: &mut CaveSystem) -> Result<u64, PathError> {
    Ok(PathCounter::new(cave)?.run()?.path_count)
}

/// Writes a search report to the given writer.
pub fn print_report_to_writer(
    report: &SearchReport,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "=== CAVE PATH SEARCH ===")?;
    writeln!(writer, "Total paths found: {}", report.path_count)?;
    writeln!(writer, "Nodes entered: {}", report.stats.nodes_entered)?;
    writeln!(writer, "Branches pruned: {}", report.stats.branches_pruned)?;
    writeln!(
        writer,
        "Reachability checks: {}",
        report.stats.reachability_checks
    )?;
    if let Some(paths) = &report.paths {
        writeln!(writer)?;
        for (i, path) in paths.iter().enumerate() {
            writeln!(writer, "Path {}: {}", i, path)?;
        }
    }
    Ok(())
}
