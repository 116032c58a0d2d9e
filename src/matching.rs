//! Maximum-cardinality bipartite matching.
//!
//! # Algorithm
//!
//! Kuhn's augmenting-path method: for each faculty node, in declaration
//! order, run a depth-first search for an augmenting path ending at an
//! unmatched right node, then flip the path's edges to grow the matching by
//! one. Right nodes visited within one search are skipped on re-entry, so
//! each search is bounded by the edge count.
//!
//! Every faculty has a sentinel edge, so a search seeded at an unmatched
//! faculty always finds an augmenting path; the final matching covers all
//! faculty. Among the multiple maximum matchings a graph may admit, the one
//! returned is determined by adjacency order — deterministic for a given
//! input, which is the contract (cardinality is the only optimality claim).
//!
//! # Complexity
//! O(V·E). The phase-based Hopcroft–Karp variant is unnecessary at this
//! scale (tens of faculty, a 12-course catalog).
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.3
//! - Hopcroft & Karp (1973), "An n^5/2 Algorithm for Maximum Matchings"

use serde::{Deserialize, Serialize};

use crate::graph::BipartiteGraph;

/// A matching over a bipartite graph.
///
/// Indices refer to the graph the matching was computed from. No faculty or
/// right index appears in more than one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    /// `(faculty index, right index)` pairs, ordered by faculty index.
    pairs: Vec<(usize, usize)>,
}

impl Matching {
    /// Number of matched pairs.
    pub fn cardinality(&self) -> usize {
        self.pairs.len()
    }

    /// Matched pairs in faculty-index order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Right partner of a faculty node, if matched.
    pub fn right_partner(&self, faculty_index: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|&&(f, _)| f == faculty_index)
            .map(|&(_, r)| r)
    }

    /// Faculty partner of a right node, if matched.
    pub fn left_partner(&self, right_index: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|&&(_, r)| r == right_index)
            .map(|&(f, _)| f)
    }
}

/// Computes a maximum-cardinality matching.
///
/// Faculty are processed in declaration order; within a search, neighbors
/// are tried in adjacency order (preference order, sentinel last). Given an
/// identical graph the result is identical pair-for-pair.
pub fn maximum_matching(graph: &BipartiteGraph) -> Matching {
    // match_of[r] = faculty currently matched to right node r.
    let mut match_of: Vec<Option<usize>> = vec![None; graph.right_count()];

    for f in 0..graph.faculty_count() {
        let mut visited = vec![false; graph.right_count()];
        try_augment(graph, f, &mut visited, &mut match_of);
    }

    let mut pairs: Vec<(usize, usize)> = match_of
        .iter()
        .enumerate()
        .filter_map(|(r, f)| f.map(|f| (f, r)))
        .collect();
    pairs.sort_unstable();

    Matching { pairs }
}

/// DFS for an augmenting path from `f`. On success the path is already
/// flipped into `match_of` and `true` is returned.
fn try_augment(
    graph: &BipartiteGraph,
    f: usize,
    visited: &mut [bool],
    match_of: &mut [Option<usize>],
) -> bool {
    for &r in graph.neighbors(f) {
        if visited[r] {
            continue;
        }
        visited[r] = true;

        match match_of[r] {
            None => {
                match_of[r] = Some(f);
                return true;
            }
            Some(holder) => {
                // Try to move the current holder elsewhere.
                if try_augment(graph, holder, visited, match_of) {
                    match_of[r] = Some(f);
                    return true;
                }
            }
        }
    }
    false
}
