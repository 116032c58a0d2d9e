//! Course catalog and load-weight catalog.
//!
//! The catalog is the fixed set of course slots faculty rank in their
//! preference lists. Load weights are credit-unit tiers (e.g. 0.5 / 1.0 / 1.5)
//! keyed by course id — the load catalog shares the course identifier space,
//! so a weight lookup can never silently miss for a validated configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assignment::AssignmentError;

/// Number of course slots in the standard catalog.
pub const STANDARD_CATALOG_SIZE: usize = 12;

/// An ordered catalog of distinct course identifiers.
///
/// Catalog order is the column order of the assignment matrix and the
/// right-partition order of the bipartite graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    courses: Vec<String>,
}

impl CourseCatalog {
    /// Creates a catalog from an ordered list of course ids.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence.
    pub fn new<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Vec::new();
        for c in courses {
            let c = c.into();
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        Self { courses: seen }
    }

    /// The standard 12-slot catalog: `Course1`..`Course12`.
    pub fn standard() -> Self {
        Self {
            courses: (1..=STANDARD_CATALOG_SIZE)
                .map(|i| format!("Course{i}"))
                .collect(),
        }
    }

    /// Number of courses in the catalog.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether `course` is a catalog member.
    pub fn contains(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    /// Position of `course` in catalog order.
    pub fn index_of(&self, course: &str) -> Option<usize> {
        self.courses.iter().position(|c| c == course)
    }

    /// Course id at a catalog position.
    pub fn course_at(&self, index: usize) -> Option<&str> {
        self.courses.get(index).map(String::as_str)
    }

    /// Iterates course ids in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }
}

/// Load weights keyed by course id.
///
/// Keys must name catalog courses; `validation::validate_problem` rejects a
/// catalog course without a weight (`MissingCourseLoad`) and a weight key
/// outside the catalog (`UnknownLoadKey`). The lookup itself still returns
/// `Result` so an unvalidated call path surfaces a mismatch instead of
/// defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadCatalog {
    // BTreeMap keeps key iteration order deterministic for validation messages.
    weights: BTreeMap<String, f64>,
}

impl LoadCatalog {
    /// Creates an empty load catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog course at the same weight.
    pub fn uniform(catalog: &CourseCatalog, weight: f64) -> Self {
        Self {
            weights: catalog
                .iter()
                .map(|c| (c.to_string(), weight))
                .collect(),
        }
    }

    /// Sets the weight for a course.
    pub fn with_load(mut self, course: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(course.into(), weight);
        self
    }

    /// Weight for a course, if configured.
    pub fn get(&self, course: &str) -> Option<f64> {
        self.weights.get(course).copied()
    }

    /// Weight for a course, surfacing a missing key as an error.
    pub fn load_for(&self, course: &str) -> Result<f64, AssignmentError> {
        self.get(course)
            .ok_or_else(|| AssignmentError::UnknownCourseLoad {
                course: course.to_string(),
            })
    }

    /// Iterates `(course id, weight)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of configured weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no weights are configured.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
