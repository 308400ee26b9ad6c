//! Dashboard configuration file handling.
//!
//! A small JSON file tells the dashboard where the seat matrix workbook lives,
//! which worksheet to read and, optionally, where to find a replacement
//! fallback table. Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logic::fallback::FallbackTable;

/// Workbook read when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "cet_matrix.xlsx";

/// Dashboard configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seat matrix workbook (xlsx, xls, xlsb or ods)
    pub data_file: PathBuf,
    /// Worksheet name; the first sheet when unset
    pub sheet: Option<String>,
    /// JSON fallback table replacing the built-in one
    pub fallback_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            sheet: None,
            fallback_file: None,
        }
    }
}

impl DashboardConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        sheet: Option<String>,
        fallback_file: Option<PathBuf>,
    ) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if sheet.is_some() {
            self.sheet = sheet;
        }
        if fallback_file.is_some() {
            self.fallback_file = fallback_file;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            anyhow::bail!("Data file must be specified");
        }

        if let Some(sheet) = &self.sheet {
            if sheet.trim().is_empty() {
                anyhow::bail!("Sheet name cannot be blank");
            }
        }

        if let Some(fallback) = &self.fallback_file {
            if fallback.as_os_str().is_empty() {
                anyhow::bail!("Fallback file path cannot be empty");
            }
        }

        Ok(())
    }

    /// The fallback table this configuration selects.
    pub fn load_fallback_table(&self) -> Result<FallbackTable> {
        match &self.fallback_file {
            Some(path) => FallbackTable::load_from_file(path)
                .with_context(|| format!("Failed to load fallback table from {:?}", path)),
            None => FallbackTable::builtin().context("Built-in fallback table is invalid"),
        }
    }
}
