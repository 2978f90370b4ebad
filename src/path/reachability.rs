use std::collections::{HashSet, VecDeque};

use crate::cave::{CaveSystem, NodeId};

/// Returns whether `target` can still be reached from `from`.
///
/// The search only steps through nodes that are visitable under the
/// current visit counts, so the answer changes as the traversal moves on.
/// It is recomputed on every call.
pub fn path_exists_to(cave: &CaveSystem, from: NodeId, target: NodeId) -> bool {
    if from == target || cave.is_connected(from, target) {
        return true;
    }

    let mut seen: HashSet<NodeId> = HashSet::from([from]);
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    for neighbor in cave.visitable_neighbors(from) {
        if seen.insert(neighbor) {
            frontier.push_back(neighbor);
        }
    }

    while let Some(node) = frontier.pop_front() {
        if cave.is_connected(node, target) {
            return true;
        }
        for neighbor in cave.visitable_neighbors(node) {
            if seen.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::VisitRule;

    fn build(edges: &[(&str, &str)]) -> CaveSystem {
        let mut cave = CaveSystem::new(VisitRule::SingleVisit);
        for (a, b) in edges {
            cave.add_connection(a, b);
        }
        cave
    }

    #[test]
    fn direct_edge_is_reachable() {
        let cave = build(&[("start", "end")]);
        assert!(path_exists_to(
            &cave,
            cave.start().unwrap(),
            cave.end().unwrap()
        ));
    }

    #[test]
    fn separate_components_are_unreachable() {
        let cave = build(&[("start", "a"), ("b", "end")]);
        assert!(!path_exists_to(
            &cave,
            cave.start().unwrap(),
            cave.end().unwrap()
        ));
    }

    #[test]
    fn exhausted_small_cave_blocks_the_route() {
        let mut cave = build(&[("start", "a"), ("a", "B"), ("B", "c"), ("c", "end")]);
        let end = cave.end().unwrap();
        let b = cave.node_id("B").unwrap();
        assert!(path_exists_to(&cave, b, end));

        let start = cave.start().unwrap();
        let c = cave.node_id("c").unwrap();
        cave.visit(start).unwrap();
        cave.visit(c).unwrap();
        assert!(!path_exists_to(&cave, b, end));
    }

    #[test]
    fn long_detour_through_large_caves_is_found() {
        let cave = build(&[
            ("start", "A"),
            ("A", "b"),
            ("b", "C"),
            ("C", "d"),
            ("d", "end"),
        ]);
        let start = cave.start().unwrap();
        assert!(path_exists_to(&cave, start, cave.end().unwrap()));
    }
}
