//! Faculty model and assignment problem configuration.
//!
//! A `Faculty` is one bipartite node per category (the matching treats each
//! category as a single node; professor headcount is metadata, not graph
//! structure). An `AssignmentProblem` bundles everything one optimization run
//! consumes: faculty with their ranked preferences, the course catalog, and
//! the load-weight catalog.

use serde::{Deserialize, Serialize};

use super::{CourseCatalog, LoadCatalog};

/// A faculty category participating in the assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique category identifier.
    pub id: String,
    /// Number of professors in this category (metadata; the matching graph
    /// carries one node per category regardless).
    pub headcount: u32,
    /// Ranked course preferences, most preferred first. A valid list
    /// enumerates the full catalog exactly once.
    pub preferences: Vec<String>,
}

impl Faculty {
    /// Creates a faculty category with headcount 1 and no preferences.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headcount: 1,
            preferences: Vec::new(),
        }
    }

    /// Sets the professor headcount.
    pub fn with_headcount(mut self, headcount: u32) -> Self {
        self.headcount = headcount;
        self
    }

    /// Sets the ranked preference list.
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = preferences.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one course to the preference list.
    pub fn with_preference(mut self, course: impl Into<String>) -> Self {
        self.preferences.push(course.into());
        self
    }
}

/// Input container for one assignment run.
///
/// Replaces interactive collection with a single validated configuration
/// value; construct it, run `validation::validate_problem`, then hand it to
/// `solver::solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentProblem {
    /// Faculty categories in declaration order (row order of the matrix and
    /// the order augmenting-path searches are seeded in).
    pub faculty: Vec<Faculty>,
    /// The course catalog.
    pub catalog: CourseCatalog,
    /// Load weights keyed by course id.
    pub loads: LoadCatalog,
}

impl AssignmentProblem {
    /// Creates a problem with no faculty.
    pub fn new(catalog: CourseCatalog, loads: LoadCatalog) -> Self {
        Self {
            faculty: Vec::new(),
            catalog,
            loads,
        }
    }

    /// Adds a faculty category.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Total professor headcount across all categories.
    pub fn total_headcount(&self) -> u32 {
        self.faculty.iter().map(|f| f.headcount).sum()
    }

    /// Looks up a faculty category by id.
    pub fn faculty_by_id(&self, id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id == id)
    }
}
