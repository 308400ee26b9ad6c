//! Seat Matrix Filter
//!
//! Selects the rows of one college that have seats in at least one of the
//! resolved fallback categories, and projects them to the columns a student
//! cares about.
//!
//! # Design
//!
//! - **Read-only**: the dataset is borrowed, never modified
//! - **Loud on schema drift**: a fallback category missing from the dataset is
//!   a configuration error, not an empty table
//! - **Empty is not an error**: no matching rows yields `QueryOutcome::NoData`
//!
//! # Projection
//!
//! ```text
//! Branch Name | <fallback categories, in chain order> | SNQ | Total
//! ```
//!
//! Rows are renumbered from 1; dataset positions are not exposed.

use crate::dataset::{
    is_fixed_column, CellValue, SeatMatrix, SeatMatrixRow, BRANCH_NAME, COLLEGE_NAME, SNQ, TOTAL,
};
use crate::error::{Result, SeatMatrixError};
use crate::logic::fallback::FallbackTable;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Banner shown when a query matches nothing.
pub const NO_DATA_MESSAGE: &str = "No data available for the selected category and college.";

/// Placeholder entry shown at the top of both selectors.
pub const PLACEHOLDER: &str = "--Select--";

// ============================================================================
// Result Types
// ============================================================================

/// One displayed row. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRow {
    pub index: usize,
    pub values: Vec<CellValue>,
}

/// Filtered and projected rows, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedTable {
    pub columns: Vec<String>,
    pub rows: Vec<ProjectedRow>,
}

impl ProjectedTable {
    fn project<'a>(columns: Vec<String>, rows: impl Iterator<Item = &'a SeatMatrixRow>) -> Self {
        let rows = rows
            .enumerate()
            .map(|(position, row)| ProjectedRow {
                index: position + 1,
                values: columns
                    .iter()
                    .map(|column| row.get(column).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect();
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let position = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row.values[position]).collect())
    }
}

impl fmt::Display for ProjectedTable {
    /// Plain-text table with a leading index column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.values.iter().map(ToString::to_string).collect())
            .collect();

        let index_width = self.rows.len().to_string().len().max(1);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:>width$}", "", width = index_width)?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:<width$}", name, width = *width)?;
        }
        writeln!(f)?;

        for (row, values) in self.rows.iter().zip(&cells) {
            write!(f, "{:>width$}", row.index, width = index_width)?;
            for (value, width) in values.iter().zip(&widths) {
                write!(f, "  {:<width$}", value, width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Outcome of a college query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// At least one row matched
    Rows(ProjectedTable),
    /// Nothing matched; show `NO_DATA_MESSAGE`
    NoData,
}

impl QueryOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn table(&self) -> Option<&ProjectedTable> {
        match self {
            Self::Rows(table) => Some(table),
            Self::NoData => None,
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Columns of a college query, in display order.
pub fn projection_columns(fallback_categories: &[String]) -> Vec<String> {
    std::iter::once(BRANCH_NAME.to_string())
        .chain(fallback_categories.iter().cloned())
        .chain([SNQ.to_string(), TOTAL.to_string()])
        .collect()
}

/// Fail if the chain is empty or names a column the dataset lacks.
fn ensure_categories(matrix: &SeatMatrix, fallback_categories: &[String]) -> Result<()> {
    if fallback_categories.is_empty() {
        return Err(SeatMatrixError::config("fallback category list is empty"));
    }
    match fallback_categories.iter().find(|c| !matrix.has_column(c)) {
        Some(column) => Err(SeatMatrixError::missing_column(column.as_str())),
        None => Ok(()),
    }
}

/// Filter the seat matrix for one college.
///
/// A row is kept when its college name equals `college_name` exactly and at
/// least one of `fallback_categories` holds a truthy seat count.
pub fn filter(
    matrix: &SeatMatrix,
    college_name: &str,
    fallback_categories: &[String],
) -> Result<QueryOutcome> {
    ensure_categories(matrix, fallback_categories)?;

    let matching = matrix.rows().iter().filter(|row| {
        row.college_name() == Some(college_name)
            && fallback_categories
                .iter()
                .any(|c| row.get(c).is_some_and(CellValue::is_truthy))
    });

    let table = ProjectedTable::project(projection_columns(fallback_categories), matching);
    tracing::debug!(
        "Query for '{}' over {:?} matched {} rows",
        college_name,
        fallback_categories,
        table.len()
    );

    if table.is_empty() {
        Ok(QueryOutcome::NoData)
    } else {
        Ok(QueryOutcome::Rows(table))
    }
}

/// Resolve `category` through the fallback table, then filter.
pub fn query(
    matrix: &SeatMatrix,
    fallback: &FallbackTable,
    college_name: &str,
    category: &str,
) -> Result<QueryOutcome> {
    filter(matrix, college_name, &fallback.resolve(category))
}

/// Every row of every college, projected for the given chain.
///
/// Columns are `College Name, Branch Name, <fallback>, SNQ, Total`. No row
/// filtering is applied.
pub fn all_colleges(matrix: &SeatMatrix, fallback_categories: &[String]) -> Result<ProjectedTable> {
    ensure_categories(matrix, fallback_categories)?;
    let columns = std::iter::once(COLLEGE_NAME.to_string())
        .chain(projection_columns(fallback_categories))
        .collect();
    Ok(ProjectedTable::project(columns, matrix.rows().iter()))
}

// ============================================================================
// Selector Options
// ============================================================================

/// Sorted category codes: every column that is not a fixed column.
pub fn category_options(matrix: &SeatMatrix) -> Vec<String> {
    matrix
        .columns()
        .iter()
        .filter(|c| !is_fixed_column(c))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, distinct, non-blank college names.
pub fn college_options(matrix: &SeatMatrix) -> Vec<String> {
    matrix
        .rows()
        .iter()
        .filter_map(SeatMatrixRow::college_name)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ============================================================================
// Selections
// ============================================================================

/// State of one selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Still on the placeholder
    #[default]
    Unselected,
    Selected(String),
}

impl Selection {
    /// Map a selector entry to a selection; the placeholder means unselected.
    pub fn from_choice(choice: &str) -> Self {
        if choice == PLACEHOLDER {
            Self::Unselected
        } else {
            Self::Selected(choice.to_string())
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Selected(value) => Some(value.as_str()),
            Self::Unselected => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// A query whose inputs have both been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub category: String,
    pub college: String,
}

impl QueryRequest {
    /// `None` until both selectors hold a real value.
    pub fn from_selections(category: &Selection, college: &Selection) -> Option<Self> {
        Some(Self {
            category: category.value()?.to_string(),
            college: college.value()?.to_string(),
        })
    }

    pub fn run(&self, matrix: &SeatMatrix, fallback: &FallbackTable) -> Result<QueryOutcome> {
        query(matrix, fallback, &self.college, &self.category)
    }

    /// Banner shown above a successful result
    pub fn success_message(&self) -> String {
        format!(
            "Showing seat matrix for {} in {}:",
            self.category, self.college
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
