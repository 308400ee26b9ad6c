//! Seat matrix data model
//!
//! An in-memory, read-only copy of the seat matrix spreadsheet: one
//! [`SeatMatrixRow`] per (college, branch) pair plus the ordered list of
//! column names as they appeared in the header row (trimmed).

use crate::error::{Result, SeatMatrixError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const COLLEGE_CODE: &str = "College Code";
pub const PLACE: &str = "Place";
pub const COLLEGE_NAME: &str = "College Name";
pub const BRANCH_NAME: &str = "Branch Name";
pub const BRANCH_CODE: &str = "Branch code";
pub const SNQ: &str = "SNQ";
pub const TOTAL: &str = "Total";

/// Columns that describe a row rather than a reservation category.
pub const FIXED_COLUMNS: [&str; 7] = [
    COLLEGE_CODE,
    PLACE,
    COLLEGE_NAME,
    BRANCH_NAME,
    BRANCH_CODE,
    SNQ,
    TOTAL,
];

/// Whether `column` is one of the seven non-category columns
pub fn is_fixed_column(column: &str) -> bool {
    FIXED_COLUMNS.contains(&column)
}

// ============================================================================
// Cell Values
// ============================================================================

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank or error cell
    #[default]
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Truthiness used by the row filter.
    ///
    /// Missing and zero are false. Any other number is true, negative counts
    /// included. Text is true when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Missing => false,
            Self::Int(n) => *n != 0,
            Self::Float(f) => !f.is_nan() && *f != 0.0,
            Self::Text(s) => !s.is_empty(),
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Borrow the text of a `Text` cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Normalize a name-like cell: numbers become text, blanks stay missing.
    fn into_text(self) -> Self {
        match self {
            Self::Text(_) => self,
            other if other.is_missing() => Self::Missing,
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Int(n) => write!(f, "{}", n),
            // Whole-number floats come from spreadsheets that store counts as doubles
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.0}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Missing
        } else {
            Self::Text(value.to_string())
        }
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One row of the seat matrix: a single branch offered by a single college.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMatrixRow {
    pub college_code: CellValue,
    pub place: CellValue,
    pub college_name: CellValue,
    pub branch_name: CellValue,
    pub branch_code: CellValue,
    /// Seat counts keyed by category code
    pub categories: BTreeMap<String, CellValue>,
    pub snq: CellValue,
    pub total: CellValue,
}

impl SeatMatrixRow {
    /// College name, if the cell is not blank
    pub fn college_name(&self) -> Option<&str> {
        self.college_name.as_text()
    }

    /// Look up a cell by column name, fixed or category.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        match column {
            COLLEGE_CODE => Some(&self.college_code),
            PLACE => Some(&self.place),
            COLLEGE_NAME => Some(&self.college_name),
            BRANCH_NAME => Some(&self.branch_name),
            BRANCH_CODE => Some(&self.branch_code),
            SNQ => Some(&self.snq),
            TOTAL => Some(&self.total),
            category => self.categories.get(category),
        }
    }

    /// Sum of the category counts that hold integers
    pub fn tracked_seats(&self) -> i64 {
        self.categories
            .values()
            .map(|cell| match cell {
                CellValue::Int(n) => *n,
                CellValue::Float(f) if f.is_finite() => *f as i64,
                _ => 0,
            })
            .sum()
    }

    /// True when the category counts add up to more than a numeric Total
    pub fn exceeds_total(&self) -> bool {
        let total = match self.total {
            CellValue::Int(n) => n,
            CellValue::Float(f) if f.is_finite() => f as i64,
            _ => return false,
        };
        self.tracked_seats() > total
    }
}

// ============================================================================
// Seat Matrix
// ============================================================================

/// The full dataset. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatMatrix {
    columns: Vec<String>,
    rows: Vec<SeatMatrixRow>,
}

impl SeatMatrix {
    /// Build a dataset from a header row and data records.
    ///
    /// Header names are trimmed. All seven fixed columns must be present;
    /// every other column is treated as a category. Short records are padded
    /// with missing cells, extra trailing cells are ignored.
    /// Columns with a blank header are dropped, not kept as unnamed categories.
    pub fn from_records<S: AsRef<str>>(
        headers: &[S],
        records: Vec<Vec<CellValue>>,
    ) -> Result<Self> {
        let mut columns: Vec<String> = Vec::with_capacity(headers.len());
        // Index into the record for each kept column
        let mut positions: Vec<usize> = Vec::with_capacity(headers.len());
        for (position, header) in headers.iter().enumerate() {
            let name = header.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if columns.iter().any(|c| c == name) {
                tracing::warn!("Duplicate column '{}' ignored", name);
                continue;
            }
            columns.push(name.to_string());
            positions.push(position);
        }

        let missing: Vec<&str> = FIXED_COLUMNS
            .iter()
            .copied()
            .filter(|fixed| !columns.iter().any(|c| c == fixed))
            .collect();
        if !missing.is_empty() {
            return Err(SeatMatrixError::schema(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                let mut cells: BTreeMap<&str, CellValue> = BTreeMap::new();
                for (column, &position) in columns.iter().zip(&positions) {
                    let cell = record
                        .get_mut(position)
                        .map(std::mem::take)
                        .unwrap_or_default();
                    cells.insert(column.as_str(), cell);
                }
                Self::build_row(cells)
            })
            .collect();

        Ok(Self { columns, rows })
    }

    fn build_row(mut cells: BTreeMap<&str, CellValue>) -> SeatMatrixRow {
        let mut take = |name: &str| cells.remove(name).unwrap_or_default();
        let college_code = take(COLLEGE_CODE);
        let place = take(PLACE);
        let college_name = take(COLLEGE_NAME).into_text();
        let branch_name = take(BRANCH_NAME);
        let branch_code = take(BRANCH_CODE);
        let snq = take(SNQ);
        let total = take(TOTAL);
        SeatMatrixRow {
            college_code,
            place,
            college_name,
            branch_name,
            branch_code,
            categories: cells
                .into_iter()
                .map(|(name, cell)| (name.to_string(), cell))
                .collect(),
            snq,
            total,
        }
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[SeatMatrixRow] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Category columns in header order
    pub fn category_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| !is_fixed_column(c))
    }

    /// Rows whose category counts add up to more than their Total
    pub fn rows_over_total(&self) -> impl Iterator<Item = &SeatMatrixRow> {
        self.rows.iter().filter(|row| row.exceeds_total())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
