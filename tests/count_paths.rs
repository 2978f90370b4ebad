use cave_paths::cave_loader::{build_cave_system, parse_edges};
use cave_paths::path::PathCounter;
use cave_paths::{count_paths, CaveSystem, PathError, VisitRule};

const SMALL: &str = "\
start-A
start-b
A-c
A-b
b-d
A-end
b-end";

const MEDIUM: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sj
kj-HN
kj-dc";

const LARGE: &str = "\
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW";

fn cave(text: &str, rule: VisitRule) -> CaveSystem {
    build_cave_system(&parse_edges(text).unwrap(), rule)
}

fn count(text: &str, rule: VisitRule) -> u64 {
    count_paths(&mut cave(text, rule)).unwrap()
}

#[test]
fn small_example() {
    assert_eq!(count(SMALL, VisitRule::SingleVisit), 10);
    assert_eq!(count(SMALL, VisitRule::OneSmallTwice), 36);
}

#[test]
fn medium_example() {
    assert_eq!(count(MEDIUM, VisitRule::SingleVisit), 19);
    assert_eq!(count(MEDIUM, VisitRule::OneSmallTwice), 103);
}

#[test]
fn large_example() {
    assert_eq!(count(LARGE, VisitRule::SingleVisit), 226);
    assert_eq!(count(LARGE, VisitRule::OneSmallTwice), 3509);
}

#[test]
fn direct_start_end_edge_counts_at_least_once() {
    assert_eq!(count("start-end", VisitRule::OneSmallTwice), 1);
    assert!(count("start-end\nstart-A\nA-end", VisitRule::OneSmallTwice) >= 1);
}

#[test]
fn disconnected_components_yield_zero() {
    assert_eq!(count("start-a\na-B\nc-end\nc-D", VisitRule::OneSmallTwice), 0);
}

#[test]
fn start_without_edges_yields_zero() {
    let mut cave = cave("a-end", VisitRule::OneSmallTwice);
    cave.add_node("start");
    let report = PathCounter::new(&mut cave).unwrap().run().unwrap();
    assert_eq!(report.path_count, 0);
    assert_eq!(report.stats.nodes_entered, 0);
    assert!(cave.visit_stack().is_empty());
}

#[test]
fn rebuilt_graph_gives_the_same_count() {
    let first = count(MEDIUM, VisitRule::OneSmallTwice);
    let second = count(MEDIUM, VisitRule::OneSmallTwice);
    assert_eq!(first, second);
}

#[test]
fn searched_graph_cannot_be_searched_again() {
    let mut cave = cave(SMALL, VisitRule::SingleVisit);
    count_paths(&mut cave).unwrap();
    assert_eq!(
        count_paths(&mut cave).unwrap_err(),
        PathError::InvalidVisit {
            name: "start".into()
        }
    );
}

#[test]
fn only_start_stays_visited_after_search() {
    for rule in [VisitRule::SingleVisit, VisitRule::OneSmallTwice] {
        let mut cave = cave(LARGE, rule);
        assert!(!cave.small_cave_visited_twice());
        count_paths(&mut cave).unwrap();

        let start = cave.start().unwrap();
        assert_eq!(cave.visit_stack(), &[start]);
        assert!(!cave.small_cave_visited_twice());
        for node in cave.nodes() {
            let expected = if node.name() == "start" { 1 } else { 0 };
            assert_eq!(node.visit_count(), expected, "node {}", node);
        }
    }
}

#[test]
fn logged_signatures_are_distinct_and_match_the_count() {
    let mut cave = cave(MEDIUM, VisitRule::OneSmallTwice);
    let report = PathCounter::new(&mut cave)
        .unwrap()
        .with_path_log()
        .run()
        .unwrap();
    let paths = report.paths.unwrap();
    assert_eq!(paths.len() as u64, report.path_count);

    let distinct: std::collections::HashSet<_> = paths.iter().collect();
    assert_eq!(distinct.len(), paths.len());
    assert!(paths
        .iter()
        .all(|p| p.starts_with("start-") && p.ends_with("-end")));
}

#[test]
fn dead_end_small_caves_are_pruned() {
    // `x` hangs off `b`, and once `b` is used `x` cannot reach `end`.
    let text = "start-A\nA-b\nb-x\nA-end";
    let mut cave = cave(text, VisitRule::SingleVisit);
    let report = PathCounter::new(&mut cave).unwrap().run().unwrap();
    // start-A-end and start-A-b-A-end.
    assert_eq!(report.path_count, 2);
    assert!(report.stats.branches_pruned > 0);
    assert!(report.stats.nodes_entered < 10);
}

#[test]
fn relaxed_rule_never_counts_fewer_paths() {
    for text in [SMALL, MEDIUM, LARGE] {
        assert!(count(text, VisitRule::OneSmallTwice) >= count(text, VisitRule::SingleVisit));
    }
}
