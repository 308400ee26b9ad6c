//! Seat matrix workbook loading
//!
//! Reads the first worksheet (or a named one) of an xlsx/xls/xlsb/ods workbook
//! with calamine. The first row is the header; fully blank rows are skipped.

use crate::dataset::{CellValue, SeatMatrix};
use crate::error::{Result, SeatMatrixError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::{debug, info};

/// Load a seat matrix from a workbook on disk.
///
/// `sheet` selects a worksheet by name; `None` uses the first one.
pub fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<SeatMatrix> {
    if !path.exists() {
        return Err(SeatMatrixError::DataFileNotFound(path.to_path_buf()));
    }

    info!("Loading seat matrix from {}", path.display());
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();
    debug!("Workbook sheets: {:?}", sheet_names);

    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| {
                SeatMatrixError::config(format!(
                    "worksheet '{}' not found in {}",
                    name,
                    path.display()
                ))
            })?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| {
                SeatMatrixError::schema(format!("{} has no worksheets", path.display()))
            })?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let matrix = matrix_from_range(&range)?;
    info!(
        "Loaded {} rows and {} columns from sheet '{}'",
        matrix.len(),
        matrix.columns().len(),
        sheet_name
    );
    Ok(matrix)
}

/// Convert a worksheet range into a seat matrix.
pub fn matrix_from_range(range: &Range<Data>) -> Result<SeatMatrix> {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| SeatMatrixError::schema("worksheet is empty, expected a header row"))?
        .iter()
        .map(|cell| data_to_cell(cell).to_string())
        .collect();

    let records: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(data_to_cell).collect::<Vec<_>>())
        .filter(|record| record.iter().any(|cell| !cell.is_missing()))
        .collect();

    SeatMatrix::from_records(&headers, records)
}

/// Map a calamine cell onto the dataset's cell model.
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Int(i64::from(*b)),
        Data::String(s) if s.is_empty() => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty | Data::Error(_) => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}
