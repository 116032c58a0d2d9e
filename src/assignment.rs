//! Assignment extraction from a raw matching.
//!
//! Converts matched index pairs into a faculty→course mapping: sentinel
//! pairs are dropped (those faculty are simply unassigned), and the result
//! is keyed by faculty id in declaration order. The extractor re-checks the
//! matching invariant — no endpoint in two pairs — and fails with
//! `MalformedMatching` if it is violated. With a correct engine that branch
//! never runs; it replaces the original's unreachable "no valid assignment"
//! path as the one defensive check in the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::graph::{BipartiteGraph, RightNode};
use crate::matching::Matching;

/// Errors from the matching → report pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// A node appeared in more than one matched pair. Internal-consistency
    /// fault; unreachable given a correct matching engine.
    #[error("matching invariant violated: node '{node}' appears in more than one pair")]
    MalformedMatching {
        /// Id of the repeated faculty or course node.
        node: String,
    },
    /// A course has no configured load weight.
    #[error("no load weight configured for course '{course}'")]
    UnknownCourseLoad {
        /// The course id that missed the load catalog.
        course: String,
    },
}

/// One faculty→course assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned faculty id.
    pub faculty: String,
    /// Assigned course id.
    pub course: String,
}

/// The faculty→course mapping derived from a matching.
///
/// Each faculty appears at most once, each course at most once. Entry order
/// follows faculty declaration order. Faculty matched to their sentinel are
/// absent — query `course_for` for an explicit `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMap {
    entries: Vec<Assignment>,
}

impl AssignmentMap {
    /// Number of real (non-sentinel) assignments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no faculty received a course.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Course assigned to a faculty, if any.
    pub fn course_for(&self, faculty: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.faculty == faculty)
            .map(|a| a.course.as_str())
    }

    /// Faculty assigned to a course, if any.
    pub fn faculty_for(&self, course: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.course == course)
            .map(|a| a.faculty.as_str())
    }

    /// Iterates assignments in faculty declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter()
    }
}

/// Extracts the faculty→course mapping from a matching.
///
/// Pairs whose right endpoint is a sentinel are discarded. Fails with
/// [`AssignmentError::MalformedMatching`] if any faculty or course endpoint
/// repeats across pairs.
pub fn extract(
    graph: &BipartiteGraph,
    matching: &Matching,
) -> Result<AssignmentMap, AssignmentError> {
    let mut seen_faculty = HashSet::new();
    let mut seen_right = HashSet::new();
    let mut entries = Vec::new();

    for &(f, r) in matching.pairs() {
        let faculty_id = graph.faculty_id(f);
        if !seen_faculty.insert(f) {
            return Err(AssignmentError::MalformedMatching {
                node: faculty_id.to_string(),
            });
        }
        if !seen_right.insert(r) {
            return Err(AssignmentError::MalformedMatching {
                node: graph.right_node(r).label(),
            });
        }

        match graph.right_node(r) {
            RightNode::Course(course) => entries.push(Assignment {
                faculty: faculty_id.to_string(),
                course: course.clone(),
            }),
            RightNode::Sentinel { .. } => {} // explicitly unassigned
        }
    }

    Ok(AssignmentMap { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::maximum_matching;
    use crate::models::{CourseCatalog, Faculty};

    fn build_graph(prefs: &[(&str, &[&str])], catalog: &CourseCatalog) -> BipartiteGraph {
        let faculty: Vec<Faculty> = prefs
            .iter()
            .map(|(id, p)| Faculty::new(*id).with_preferences(p.iter().copied()))
            .collect();
        BipartiteGraph::build(&faculty, catalog)
    }

    #[test]
    fn test_extract_drops_sentinel_pairs() {
        // Two faculty, one course: one of them lands on a sentinel.
        let catalog = CourseCatalog::new(["C1"]);
        let g = build_graph(&[("F1", &["C1"]), ("F2", &["C1"])], &catalog);
        let m = maximum_matching(&g);

        let map = extract(&g, &m).unwrap();
        assert_eq!(m.cardinality(), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.faculty_for("C1"), Some("F2"));
        assert_eq!(map.course_for("F1"), None);
    }

    #[test]
    fn test_extract_keys_by_faculty() {
        let catalog = CourseCatalog::new(["C1", "C2"]);
        let g = build_graph(&[("F1", &["C1"]), ("F2", &["C2"])], &catalog);
        let m = maximum_matching(&g);

        let map = extract(&g, &m).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.course_for("F1"), Some("C1"));
        assert_eq!(map.course_for("F2"), Some("C2"));
        assert_eq!(map.course_for("F3"), None);
    }

    #[test]
    fn test_no_duplicate_courses_in_map() {
        let catalog = CourseCatalog::standard();
        let prefs: Vec<String> = (1..=12).map(|i| format!("Course{i}")).collect();
        let faculty: Vec<Faculty> = (1..=6)
            .map(|i| Faculty::new(format!("F{i}")).with_preferences(prefs.clone()))
            .collect();
        let g = BipartiteGraph::build(&faculty, &catalog);
        let map = extract(&g, &maximum_matching(&g)).unwrap();

        let mut courses: Vec<&str> = map.iter().map(|a| a.course.as_str()).collect();
        courses.sort_unstable();
        courses.dedup();
        assert_eq!(courses.len(), map.len());
    }

    #[test]
    fn test_malformed_matching_detected() {
        // Hand-built matching with F1 in two pairs.
        let catalog = CourseCatalog::new(["C1", "C2"]);
        let g = build_graph(&[("F1", &["C1", "C2"])], &catalog);
        let bogus: Matching = serde_json::from_value(serde_json::json!({
            "pairs": [[0, 0], [0, 1]]
        }))
        .unwrap();

        let err = extract(&g, &bogus).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::MalformedMatching {
                node: "F1".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_matching_duplicate_course() {
        let catalog = CourseCatalog::new(["C1"]);
        let g = build_graph(&[("F1", &["C1"]), ("F2", &["C1"])], &catalog);
        let bogus: Matching = serde_json::from_value(serde_json::json!({
            "pairs": [[0, 0], [1, 0]]
        }))
        .unwrap();

        let err = extract(&g, &bogus).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::MalformedMatching {
                node: "C1".to_string()
            }
        );
    }
}
