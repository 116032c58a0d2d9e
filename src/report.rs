//! Report artifacts: per-faculty load totals and the assignment matrix.
//!
//! Both are derived from the `AssignmentMap` and are write-once values for
//! external reporting layers. Load lookups go through the load catalog and
//! surface a missing key as `UnknownCourseLoad` — never a silent default.

use serde::{Deserialize, Serialize};

use crate::assignment::{AssignmentError, AssignmentMap};
use crate::models::{CourseCatalog, Faculty, LoadCatalog};

/// Load carried by one assigned faculty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyLoad {
    /// Faculty id.
    pub faculty: String,
    /// Assigned course id.
    pub course: String,
    /// Load weight of the assigned course.
    pub load: f64,
}

/// Computes load totals for every assigned faculty.
///
/// Entry order follows the assignment map (faculty declaration order).
/// Unassigned faculty carry no load and are absent.
pub fn load_totals(
    map: &AssignmentMap,
    loads: &LoadCatalog,
) -> Result<Vec<FacultyLoad>, AssignmentError> {
    let mut totals = Vec::with_capacity(map.len());
    for a in map.iter() {
        let load = loads.load_for(&a.course)?;
        totals.push(FacultyLoad {
            faculty: a.faculty.clone(),
            course: a.course.clone(),
            load,
        });
    }
    Ok(totals)
}

/// The faculty × course occupancy grid.
///
/// Rows follow faculty declaration order, columns follow catalog order. An
/// occupied cell carries the faculty id; `None` is the "Unassigned"
/// placeholder. At most one occupied cell per row and per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Option<String>>>,
}

impl AssignmentMatrix {
    /// Builds the grid from an assignment map.
    pub fn build(faculty: &[Faculty], catalog: &CourseCatalog, map: &AssignmentMap) -> Self {
        let rows: Vec<String> = faculty.iter().map(|f| f.id.clone()).collect();
        let columns: Vec<String> = catalog.iter().map(str::to_string).collect();

        let mut cells = vec![vec![None; columns.len()]; rows.len()];
        for a in map.iter() {
            let row = rows.iter().position(|r| *r == a.faculty);
            let col = catalog.index_of(&a.course);
            if let (Some(row), Some(col)) = (row, col) {
                cells[row][col] = Some(a.faculty.clone());
            }
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Row labels (faculty ids) in declaration order.
    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    /// Column labels (course ids) in catalog order.
    pub fn column_labels(&self) -> &[String] {
        &self.columns
    }

    /// Cell content: the assigned faculty id, or `None` for unassigned.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of occupied cells.
    pub fn assigned_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count()
    }
}
