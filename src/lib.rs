//! SeatMatrix Library
//!
//! Loads a K-CET seat matrix workbook, resolves reservation categories through
//! their fallback chains and filters the matrix by college. The interactive
//! dashboard and the headless commands both sit on top of these pieces.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod logic;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, DashboardTab};
pub use config::DashboardConfig;
pub use dataset::{CellValue, SeatMatrix, SeatMatrixRow};
pub use error::{Result, SeatMatrixError};
pub use loader::load_workbook;
pub use logic::fallback::FallbackTable;
pub use logic::filter::{
    all_colleges, category_options, college_options, filter, query, ProjectedTable, QueryOutcome,
    QueryRequest, Selection,
};
