//! Assignment domain models.
//!
//! Core data types for a faculty-to-course assignment run: the course and
//! load catalogs, the faculty categories with their ranked preferences, and
//! the `AssignmentProblem` configuration consumed by the solver.
//!
//! One faculty node per category: headcount is carried as metadata and never
//! enters the matching graph.

mod course;
mod faculty;

pub use course::{CourseCatalog, LoadCatalog, STANDARD_CATALOG_SIZE};
pub use faculty::{AssignmentProblem, Faculty};
