//! Faculty-to-course assignment via maximum-cardinality bipartite matching.
//!
//! Each faculty category ranks the full course catalog; the solver builds a
//! bipartite graph from those preferences plus one sentinel "unassigned"
//! fallback node per faculty, computes a maximum-cardinality matching with
//! the augmenting-path method, and derives a deterministic assignment report
//! (faculty→course mapping, per-faculty load totals, occupancy matrix).
//!
//! Preference rank and course load are never matching weights: the engine
//! maximizes the number of matched pairs only, and the model supports at
//! most one course per faculty by construction.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Faculty`, `CourseCatalog`, `LoadCatalog`,
//!   `AssignmentProblem`
//! - **`validation`**: Input integrity checks (preference list contract,
//!   headcount range, load-catalog key space)
//! - **`graph`**: Bipartite graph with typed sentinel nodes
//! - **`matching`**: Kuhn's augmenting-path maximum matching
//! - **`assignment`**: Mapping extraction from the raw matching
//! - **`report`**: Load totals and the assignment matrix
//! - **`solver`**: End-to-end pipeline
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.3
//! - Hopcroft & Karp (1973), "An n^5/2 Algorithm for Maximum Matchings"

pub mod assignment;
pub mod graph;
pub mod matching;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;
