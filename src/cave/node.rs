use std::fmt;
use std::hash::{Hash, Hasher};

use crate::path::PathError;

/// Index of a node inside a `CaveSystem` arena.
pub type NodeId = usize;

/// Name of the cave every path begins at.
pub const START: &str = "start";
/// Name of the cave every path ends at.
pub const END: &str = "end";

/// Category of a cave, fixed when the node is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaveKind {
    /// Revisitable without limit.
    Large,
    /// Subject to the single- or double-visit restriction.
    Small,
}

impl CaveKind {
    /// Large caves have an all-uppercase name (at least one cased
    /// character and no lowercase ones). Everything else is small.
    pub fn from_name(name: &str) -> Self {
        let has_upper = name.chars().any(char::is_uppercase);
        let has_lower = name.chars().any(char::is_lowercase);
        if has_upper && !has_lower {
            CaveKind::Large
        } else {
            CaveKind::Small
        }
    }
}

/// Policy deciding how often small caves may appear on one path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitRule {
    /// Every small cave at most once.
    SingleVisit,
    /// A single small cave (other than `start`/`end`) may be visited twice.
    #[default]
    OneSmallTwice,
}

/// One cave. Connections are arena ids so the graph owns no cycles.
#[derive(Clone, Debug)]
pub struct CaveNode {
    name: String,
    kind: CaveKind,
    endpoint: bool,
    visit_count: u32,
    connections: Vec<NodeId>,
}

impl CaveNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: CaveKind::from_name(name),
            endpoint: name == START || name == END,
            visit_count: 0,
            connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CaveKind {
        self.kind
    }

    /// True for large caves, which never run out of visits.
    pub fn is_revisitable(&self) -> bool {
        self.kind == CaveKind::Large
    }

    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    /// Neighbor ids in the order the edges were added.
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }

    pub fn is_connected_to(&self, other: NodeId) -> bool {
        self.connections.contains(&other)
    }

    pub(crate) fn add_connection(&mut self, other: NodeId) {
        self.connections.push(other);
    }

    /// Whether the node may be entered given the graph-wide double-visit
    /// flag and the active visit rule.
    pub fn can_be_visited(&self, small_cave_visited_twice: bool, rule: VisitRule) -> bool {
        if self.is_revisitable() {
            return true;
        }
        if self.endpoint {
            return self.visit_count == 0;
        }
        match rule {
            VisitRule::SingleVisit => self.visit_count == 0,
            VisitRule::OneSmallTwice if !small_cave_visited_twice => self.visit_count < 2,
            VisitRule::OneSmallTwice => self.visit_count == 0,
        }
    }

    /// Increments the visit count. A small cave reaching two visits
    /// raises the double-visit flag.
    pub fn visit(
        &mut self,
        small_cave_visited_twice: &mut bool,
        rule: VisitRule,
    ) -> Result<(), PathError> {
        if !self.can_be_visited(*small_cave_visited_twice, rule) {
            return Err(PathError::InvalidVisit {
                name: self.name.clone(),
            });
        }
        self.visit_count += 1;
        if !self.is_revisitable() && self.visit_count == 2 {
            *small_cave_visited_twice = true;
        }
        Ok(())
    }

    /// Decrements the visit count, clearing the double-visit flag first
    /// when this small cave held it.
    pub fn unvisit(&mut self, small_cave_visited_twice: &mut bool) -> Result<(), PathError> {
        if self.visit_count == 0 {
            return Err(PathError::InvalidUnvisit {
                name: self.name.clone(),
            });
        }
        if !self.is_revisitable() && self.visit_count == 2 {
            *small_cave_visited_twice = false;
        }
        self.visit_count -= 1;
        Ok(())
    }
}

impl PartialEq for CaveNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CaveNode {}

impl Hash for CaveNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for CaveNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
