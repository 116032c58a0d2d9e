//! Assignment pipeline orchestration.
//!
//! Runs one optimization end to end:
//!
//! 1. Validate the problem (no graph is built on failure).
//! 2. Build the bipartite graph with sentinel fallback nodes.
//! 3. Compute the maximum-cardinality matching.
//! 4. Extract the faculty→course mapping, dropping sentinel pairs.
//! 5. Derive load totals and the assignment matrix.
//!
//! The run either produces a complete [`AssignmentOutcome`] or an error —
//! never a partial result. Each run owns its graph and matching, so runs may
//! execute in parallel without coordination.

use thiserror::Error;

use crate::assignment::{extract, AssignmentError, AssignmentMap};
use crate::graph::BipartiteGraph;
use crate::matching::{maximum_matching, Matching};
use crate::models::AssignmentProblem;
use crate::report::{load_totals, AssignmentMatrix, FacultyLoad};
use crate::validation::{validate_problem, ValidationError};

/// Everything one run produces, for reporting and rendering layers.
#[derive(Debug, Clone)]
pub struct AssignmentOutcome {
    /// The bipartite graph the matching was computed over (read-only, for
    /// layout rendering).
    pub graph: BipartiteGraph,
    /// The raw matching, pairs ordered by faculty declaration.
    pub matching: Matching,
    /// Faculty→course mapping with sentinel pairs removed.
    pub assignments: AssignmentMap,
    /// Per-faculty load totals for assigned faculty.
    pub loads: Vec<FacultyLoad>,
    /// Faculty × course occupancy grid.
    pub matrix: AssignmentMatrix,
}

/// Errors a full run can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The input failed structural validation.
    #[error("invalid assignment problem: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),
    /// The matching → report pipeline failed an internal check.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Runs the full assignment pipeline.
///
/// Deterministic: an identical problem yields an identical outcome,
/// matching included pair-for-pair.
pub fn solve(problem: &AssignmentProblem) -> Result<AssignmentOutcome, SolveError> {
    validate_problem(problem).map_err(SolveError::Validation)?;

    let graph = BipartiteGraph::from_problem(problem);
    let matching = maximum_matching(&graph);
    let assignments = extract(&graph, &matching)?;
    let loads = load_totals(&assignments, &problem.loads)?;
    let matrix = AssignmentMatrix::build(&problem.faculty, &problem.catalog, &assignments);

    Ok(AssignmentOutcome {
        graph,
        matching,
        assignments,
        loads,
        matrix,
    })
}
