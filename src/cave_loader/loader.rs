use std::fs;
use std::path::Path;

use super::error::CaveLoaderError;
use crate::cave::{CaveKind, CaveSystem, VisitRule};

//─────────────────────────────────────────────────────────────────────────────

/// Loads an edge list from a file and builds the cave system from it.
pub fn load_cave_system_from_file(
    file_path: &Path,
    rule: VisitRule,
) -> Result<CaveSystem, CaveLoaderError> {
    let display = file_path.display().to_string();
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| CaveLoaderError::ReadFile(display.clone(), e))?;

    let edges = parse_edges(&file_content)?;
    if edges.is_empty() {
        return Err(CaveLoaderError::NoEdgesFound(display));
    }
    Ok(build_cave_system(&edges, rule))
}

/// Parses one `a-b` edge per non-blank line. Line numbers in errors are
/// 1-based.
pub fn parse_edges(text: &str) -> Result<Vec<(String, String)>, CaveLoaderError> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| parse_edge(line_no, line))
        .collect()
}

fn parse_edge(line_no: usize, line: &str) -> Result<(String, String), CaveLoaderError> {
    let malformed = || CaveLoaderError::MalformedEdge {
        line: line_no,
        content: line.to_string(),
    };

    let (first, second) = line.split_once('-').ok_or_else(malformed)?;
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() || second.contains('-') {
        return Err(malformed());
    }
    if first == second {
        return Err(CaveLoaderError::SelfLoop {
            line: line_no,
            name: first.to_string(),
        });
    }
    if CaveKind::from_name(first) == CaveKind::Large
        && CaveKind::from_name(second) == CaveKind::Large
    {
        return Err(CaveLoaderError::AdjacentLargeCaves {
            line: line_no,
            first: first.to_string(),
            second: second.to_string(),
        });
    }
    Ok((first.to_string(), second.to_string()))
}

/// Builds a cave system, creating nodes on first reference. An edge that
/// was already added is skipped, so the connection lists hold no repeats.
pub fn build_cave_system(edges: &[(String, String)], rule: VisitRule) -> CaveSystem {
    let mut cave = CaveSystem::new(rule);
    for (first, second) in edges {
        let a = cave.add_node(first);
        let b = cave.add_node(second);
        if !cave.is_connected(a, b) {
            cave.connect(a, b);
        }
    }
    cave
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_edges_and_skips_blank_lines() {
        let edges = parse_edges("start-A\n\n  A-end  \n").unwrap();
        assert_eq!(
            edges,
            vec![
                ("start".to_string(), "A".to_string()),
                ("A".to_string(), "end".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_lines_without_exactly_two_names() {
        for bad in ["start", "start-", "-end", "a-b-c"] {
            match parse_edges(bad) {
                Err(CaveLoaderError::MalformedEdge { line, content }) => {
                    assert_eq!(line, 1);
                    assert_eq!(content, bad);
                }
                other => panic!("expected malformed edge for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_self_loops() {
        let err = parse_edges("start-a\na-a").unwrap_err();
        assert!(matches!(err, CaveLoaderError::SelfLoop { line: 2, ref name } if name == "a"));
    }

    #[test]
    fn rejects_passages_between_large_caves() {
        let err = parse_edges("start-A\nA-B\nB-end").unwrap_err();
        assert!(matches!(err, CaveLoaderError::AdjacentLargeCaves { line: 2, .. }));
    }

    #[test]
    fn repeated_edges_are_connected_once() {
        let edges = parse_edges("start-A\nA-start\nA-end").unwrap();
        let cave = build_cave_system(&edges, VisitRule::SingleVisit);
        assert_eq!(cave.len(), 3);
        assert_eq!(cave.edge_count(), 2);
        assert_eq!(cave.rule(), VisitRule::SingleVisit);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start-A").unwrap();
        writeln!(file, "A-end").unwrap();
        let cave = load_cave_system_from_file(file.path(), VisitRule::OneSmallTwice).unwrap();
        assert!(cave.start().is_some());
        assert!(cave.end().is_some());
    }

    #[test]
    fn empty_file_has_no_edges() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_cave_system_from_file(file.path(), VisitRule::OneSmallTwice).unwrap_err();
        assert!(matches!(err, CaveLoaderError::NoEdgesFound(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_cave_system_from_file(&dir.path().join("nope.txt"), VisitRule::SingleVisit)
            .unwrap_err();
        assert!(matches!(err, CaveLoaderError::ReadFile(_, _)));
    }
}
