//! Input validation for assignment problems.
//!
//! Checks structural integrity of a configuration before any graph is built.
//! Detects:
//! - Preference lists of the wrong length, with out-of-catalog entries, or
//!   with duplicate entries
//! - Total headcount outside the supported range
//! - Duplicate faculty ids
//! - Load-catalog keys that do not line up with the course catalog
//!
//! All problems are collected and reported together; on failure the run
//! aborts with no partial output.

use crate::models::AssignmentProblem;
use std::collections::HashSet;

/// Inclusive bounds on the total professor headcount.
pub const HEADCOUNT_RANGE: (u32, u32) = (1, 30);

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending entity.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A preference list has the wrong length, references an unknown course,
    /// or repeats a course.
    InvalidPreferenceList,
    /// Total professor headcount outside the supported range.
    InvalidHeadcount,
    /// Two faculty categories share an id.
    DuplicateFacultyId,
    /// A catalog course has no load weight.
    MissingCourseLoad,
    /// A load-catalog key names no catalog course.
    UnknownLoadKey,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an assignment problem.
///
/// Checks:
/// 1. No duplicate faculty ids
/// 2. Every preference list has exactly `catalog.len()` entries (12 for the
///    standard catalog)
/// 3. Every preference entry is a catalog member
/// 4. No preference list repeats a course
/// 5. Total headcount within [`HEADCOUNT_RANGE`]
/// 6. Every catalog course has a load weight, and every weight key names a
///    catalog course
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &AssignmentProblem) -> ValidationResult {
    let mut errors = Vec::new();

    // Faculty id uniqueness
    let mut faculty_ids = HashSet::new();
    for f in &problem.faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFacultyId,
                format!("Duplicate faculty id: {}", f.id),
            ));
        }
    }

    // Preference list contract: exact length, catalog membership, distinctness
    let expected = problem.catalog.len();
    for f in &problem.faculty {
        if f.preferences.len() != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPreferenceList,
                format!(
                    "Invalid preference list for {}: expected {} entries, found {}",
                    f.id,
                    expected,
                    f.preferences.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for course in &f.preferences {
            if !problem.catalog.contains(course) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPreferenceList,
                    format!(
                        "Invalid preference list for {}: '{}' is not in the course catalog",
                        f.id, course
                    ),
                ));
            } else if !seen.insert(course.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPreferenceList,
                    format!(
                        "Invalid preference list for {}: '{}' listed more than once",
                        f.id, course
                    ),
                ));
            }
        }
    }

    // Headcount range
    let (min, max) = HEADCOUNT_RANGE;
    let total = problem.total_headcount();
    if total < min || total > max {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHeadcount,
            format!("Total headcount {total} outside supported range {min}..={max}"),
        ));
    }

    // Load catalog key space must coincide with the course catalog
    for course in problem.catalog.iter() {
        if problem.loads.get(course).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingCourseLoad,
                format!("No load weight configured for course '{course}'"),
            ));
        }
    }
    for (key, _) in problem.loads.iter() {
        if !problem.catalog.contains(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLoadKey,
                format!("Load catalog key '{key}' names no catalog course"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
