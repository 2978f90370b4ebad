// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Undirected cave graph stored as an arena of nodes keyed by name.  Edges are
// kept as id lists on both endpoints, so the structure owns no cycles.  The
// graph also carries the mutable search state shared by every small cave: the
// double-visit flag, the visit rule and the stack of caves on the active path.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;

use super::node::{CaveNode, NodeId, VisitRule, END, START};
use crate::path::PathError;

/// Resumable position in a node's connection list.
///
/// Each call to [`CaveSystem::next_visitable_neighbor`] re-checks the
/// visitability of the next candidate, so the walk always reflects the
/// live visit counts even when the graph is mutated between steps.
#[derive(Clone, Copy, Debug)]
pub struct NeighborCursor {
    node: NodeId,
    position: usize,
}

impl NeighborCursor {
    pub fn new(node: NodeId) -> Self {
        Self { node, position: 0 }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// A set of caves and the undirected passages between them.
#[derive(Clone, Debug, Default)]
pub struct CaveSystem {
    nodes: Vec<CaveNode>,
    index: HashMap<String, NodeId>,
    rule: VisitRule,
    small_cave_visited_twice: bool,
    visit_stack: Vec<NodeId>,
}

impl CaveSystem {
    pub fn new(rule: VisitRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    /// Returns the id of `name`, creating the node on first reference.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(CaveNode::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Adds both nodes if needed and connects them.
    pub fn add_connection(&mut self, first: &str, second: &str) -> (NodeId, NodeId) {
        let a = self.add_node(first);
        let b = self.add_node(second);
        self.connect(a, b);
        (a, b)
    }

    /// Records a symmetric edge. Repeated calls create repeated edges.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a].add_connection(b);
        self.nodes[b].add_connection(a);
    }

    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes
            .get(a)
            .map(|node| node.is_connected_to(b))
            .unwrap_or(false)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&CaveNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[CaveNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges, counting repeats.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.connections().len()).sum::<usize>() / 2
    }

    pub fn start(&self) -> Option<NodeId> {
        self.node_id(START)
    }

    pub fn end(&self) -> Option<NodeId> {
        self.node_id(END)
    }

    pub fn rule(&self) -> VisitRule {
        self.rule
    }

    pub fn small_cave_visited_twice(&self) -> bool {
        self.small_cave_visited_twice
    }

    /// Caves on the active path, oldest first.
    pub fn visit_stack(&self) -> &[NodeId] {
        &self.visit_stack
    }

    pub fn current(&self) -> Option<NodeId> {
        self.visit_stack.last().copied()
    }

    pub fn can_be_visited(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .map(|node| node.can_be_visited(self.small_cave_visited_twice, self.rule))
            .unwrap_or(false)
    }

    /// Enters `id` and pushes it on the visit stack.
    pub fn visit(&mut self, id: NodeId) -> Result<(), PathError> {
        self.nodes[id].visit(&mut self.small_cave_visited_twice, self.rule)?;
        self.visit_stack.push(id);
        Ok(())
    }

    /// Leaves `id`, which must be the current node, and pops it.
    pub fn unvisit(&mut self, id: NodeId) -> Result<(), PathError> {
        self.nodes[id].unvisit(&mut self.small_cave_visited_twice)?;
        debug_assert_eq!(self.visit_stack.last(), Some(&id));
        self.visit_stack.pop();
        Ok(())
    }

    /// Lazily yields the neighbors of `id` that can be visited right now.
    pub fn visitable_neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(id)
            .map(|node| node.connections())
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(move |&neighbor| self.can_be_visited(neighbor))
    }

    /// Advances `cursor` to the next currently visitable neighbor.
    pub fn next_visitable_neighbor(&self, cursor: &mut NeighborCursor) -> Option<NodeId> {
        let connections = self.nodes.get(cursor.node)?.connections();
        while let Some(&neighbor) = connections.get(cursor.position) {
            cursor.position += 1;
            if self.can_be_visited(neighbor) {
                return Some(neighbor);
            }
        }
        None
    }

    /// Dash-joined names of the active path followed by `end`.
    pub fn path_signature(&self) -> String {
        let mut signature = self
            .visit_stack
            .iter()
            .map(|&id| self.nodes[id].name())
            .collect::<Vec<_>>()
            .join("-");
        signature.push('-');
        signature.push_str(END);
        signature
    }
}
