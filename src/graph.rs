//! Bipartite graph construction.
//!
//! Left partition: one node per faculty category, in declaration order.
//! Right partition: every catalog course (catalog order) followed by one
//! sentinel node per faculty. A sentinel is a typed fallback match — the
//! faculty it belongs to is the only node it connects to, so every faculty
//! has at least one feasible partner and the matching never fails outright.
//!
//! Edge order is deterministic: each faculty's adjacency lists its preferred
//! courses in preference order, then its own sentinel. This fixes which
//! maximum matching the augmenting-path search discovers; cardinality is
//! order-independent.

use serde::{Deserialize, Serialize};

use crate::models::{AssignmentProblem, CourseCatalog, Faculty};

/// A node in the right (course-side) partition.
///
/// Sentinel ownership is carried in the type rather than encoded into an
/// identifier string, so nothing downstream has to parse node names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RightNode {
    /// A catalog course.
    Course(String),
    /// The fallback node for one faculty. Connected only to its owner.
    Sentinel {
        /// Id of the faculty this sentinel belongs to.
        owner: String,
    },
}

impl RightNode {
    /// Whether this node is a sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, RightNode::Sentinel { .. })
    }

    /// Course id, if this node is a course.
    pub fn course_id(&self) -> Option<&str> {
        match self {
            RightNode::Course(id) => Some(id),
            RightNode::Sentinel { .. } => None,
        }
    }

    /// Display identifier for rendering layers: the course id, or
    /// `Unassigned_<faculty>` for a sentinel.
    pub fn label(&self) -> String {
        match self {
            RightNode::Course(id) => id.clone(),
            RightNode::Sentinel { owner } => format!("Unassigned_{owner}"),
        }
    }
}

/// A faculty/course bipartite graph with sentinel fallback nodes.
///
/// Read-only once built; external rendering layers consume the partitions
/// and edges as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BipartiteGraph {
    faculty: Vec<String>,
    right: Vec<RightNode>,
    /// Per-faculty right-node indices, preference order then sentinel.
    adjacency: Vec<Vec<usize>>,
}

impl BipartiteGraph {
    /// Builds the graph from faculty and the course catalog.
    ///
    /// Assumes preferences already passed `validation::validate_problem`.
    /// Entries outside the catalog and repeated entries are skipped rather
    /// than inserted — parallel edges are meaningless for matching, and
    /// skipping lets tests build partial-adjacency graphs directly.
    pub fn build(faculty: &[Faculty], catalog: &CourseCatalog) -> Self {
        let mut right: Vec<RightNode> = catalog
            .iter()
            .map(|c| RightNode::Course(c.to_string()))
            .collect();

        let mut adjacency = Vec::with_capacity(faculty.len());
        for f in faculty {
            let mut neighbors: Vec<usize> = Vec::with_capacity(f.preferences.len() + 1);
            for course in &f.preferences {
                if let Some(idx) = catalog.index_of(course) {
                    if !neighbors.contains(&idx) {
                        neighbors.push(idx);
                    }
                }
            }
            // Sentinel goes last so preferred courses are tried first.
            let sentinel_idx = right.len();
            right.push(RightNode::Sentinel {
                owner: f.id.clone(),
            });
            neighbors.push(sentinel_idx);
            adjacency.push(neighbors);
        }

        Self {
            faculty: faculty.iter().map(|f| f.id.clone()).collect(),
            right,
            adjacency,
        }
    }

    /// Builds the graph from a full problem configuration.
    pub fn from_problem(problem: &AssignmentProblem) -> Self {
        Self::build(&problem.faculty, &problem.catalog)
    }

    /// Number of faculty (left) nodes.
    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }

    /// Number of right nodes (courses + sentinels).
    pub fn right_count(&self) -> usize {
        self.right.len()
    }

    /// Faculty id at a left index.
    pub fn faculty_id(&self, index: usize) -> &str {
        &self.faculty[index]
    }

    /// Right node at an index.
    pub fn right_node(&self, index: usize) -> &RightNode {
        &self.right[index]
    }

    /// Right-node neighbor indices of a faculty, in insertion order.
    pub fn neighbors(&self, faculty_index: usize) -> &[usize] {
        &self.adjacency[faculty_index]
    }

    /// Total edge count.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Iterates all edges as `(faculty id, right node)` pairs, for rendering.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &RightNode)> {
        self.adjacency.iter().enumerate().flat_map(move |(f, adj)| {
            adj.iter()
                .map(move |&r| (self.faculty[f].as_str(), &self.right[r]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Faculty;

    fn full_preferences() -> Vec<String> {
        (1..=12).map(|i| format!("Course{i}")).collect()
    }

    #[test]
    fn test_partition_sizes() {
        let catalog = CourseCatalog::standard();
        let faculty = vec![
            Faculty::new("F1").with_preferences(full_preferences()),
            Faculty::new("F2").with_preferences(full_preferences()),
        ];
        let g = BipartiteGraph::build(&faculty, &catalog);

        assert_eq!(g.faculty_count(), 2);
        // 12 courses + one sentinel per faculty
        assert_eq!(g.right_count(), 14);
        // 12 preference edges + 1 sentinel edge each
        assert_eq!(g.edge_count(), 26);
    }

    #[test]
    fn test_sentinel_per_faculty() {
        let catalog = CourseCatalog::standard();
        let faculty = vec![
            Faculty::new("F1").with_preferences(full_preferences()),
            Faculty::new("F2").with_preferences(full_preferences()),
        ];
        let g = BipartiteGraph::build(&faculty, &catalog);

        for f in 0..g.faculty_count() {
            let last = *g.neighbors(f).last().unwrap();
            match g.right_node(last) {
                RightNode::Sentinel { owner } => assert_eq!(owner, g.faculty_id(f)),
                other => panic!("expected sentinel, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_sentinel_connects_only_owner() {
        let catalog = CourseCatalog::standard();
        let faculty = vec![
            Faculty::new("F1").with_preferences(full_preferences()),
            Faculty::new("F2").with_preferences(full_preferences()),
        ];
        let g = BipartiteGraph::build(&faculty, &catalog);

        for r in catalog.len()..g.right_count() {
            let owners: Vec<usize> = (0..g.faculty_count())
                .filter(|&f| g.neighbors(f).contains(&r))
                .collect();
            assert_eq!(owners.len(), 1);
        }
    }

    #[test]
    fn test_preference_order_preserved() {
        let catalog = CourseCatalog::standard();
        let mut prefs = full_preferences();
        prefs.reverse();
        let faculty = vec![Faculty::new("F1").with_preferences(prefs)];
        let g = BipartiteGraph::build(&faculty, &catalog);

        let adj = g.neighbors(0);
        // Course12 (catalog index 11) first, down to Course1, then sentinel.
        assert_eq!(adj[0], 11);
        assert_eq!(adj[11], 0);
        assert!(g.right_node(adj[12]).is_sentinel());
    }

    #[test]
    fn test_unknown_and_duplicate_entries_skipped() {
        let catalog = CourseCatalog::standard();
        let faculty = vec![Faculty::new("F1").with_preferences([
            "Course1",
            "Nonexistent",
            "Course1",
            "Course2",
        ])];
        let g = BipartiteGraph::build(&faculty, &catalog);

        // Course1, Course2, sentinel.
        assert_eq!(g.neighbors(0).len(), 3);
    }

    #[test]
    fn test_sentinel_label() {
        let node = RightNode::Sentinel {
            owner: "F1".to_string(),
        };
        assert_eq!(node.label(), "Unassigned_F1");
        assert!(node.is_sentinel());
        assert_eq!(node.course_id(), None);

        let course = RightNode::Course("Course3".to_string());
        assert_eq!(course.label(), "Course3");
        assert_eq!(course.course_id(), Some("Course3"));
    }

    #[test]
    fn test_edges_iterator() {
        let catalog = CourseCatalog::standard();
        let faculty = vec![Faculty::new("F1").with_preferences(["Course1", "Course2"])];
        let g = BipartiteGraph::build(&faculty, &catalog);

        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], ("F1", &RightNode::Course("Course1".into())));
        assert!(edges[2].1.is_sentinel());
    }
}
