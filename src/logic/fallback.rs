//! Category Fallback Resolver
//!
//! Translates a requested reservation category into the ordered list of
//! category columns worth looking at when that category has no seats.
//!
//! # Design
//!
//! - **Data-driven**: the chains live in `data/fallback_order.json`, embedded at
//!   compile time; an override file can replace them at startup
//! - **Immutable**: a `FallbackTable` is built once and only read afterwards
//! - **Pure logic**: `resolve` has no I/O and never fails
//!
//! # Resolution Rules
//!
//! | Requested   | Resolved To |
//! |-------------|-------------|
//! | `1R`        | `1R, 1G, GM` (rural -> general pool -> general merit) |
//! | `SCG`       | `SCG, GM` |
//! | `GM`        | `GM` |
//! | unknown     | the code itself, alone |

use crate::error::{Result, SeatMatrixError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Chains shipped with the binary.
const BUILTIN_FALLBACK_JSON: &str = include_str!("../../data/fallback_order.json");

/// The general merit pool; every chain ends here.
pub const GENERAL_MERIT: &str = "GM";

// ============================================================================
// Fallback Table
// ============================================================================

/// Immutable mapping from category code to its ordered fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackTable {
    chains: BTreeMap<String, Vec<String>>,
}

impl FallbackTable {
    /// The table embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FALLBACK_JSON)
    }

    /// Parse and validate a table from a JSON object of `code -> [codes]`.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a JSON file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let table = Self::from_json(&content)?;
        tracing::info!(
            "Loaded {} fallback chains from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Check the shape of every chain.
    ///
    /// A chain must be non-empty, start with its own key and end in `GM`.
    pub fn validate(&self) -> Result<()> {
        for (category, chain) in &self.chains {
            match (chain.first(), chain.last()) {
                (None, _) | (_, None) => {
                    return Err(SeatMatrixError::config(format!(
                        "fallback chain for '{}' is empty",
                        category
                    )));
                }
                (Some(first), _) if first != category => {
                    return Err(SeatMatrixError::config(format!(
                        "fallback chain for '{}' starts with '{}'",
                        category, first
                    )));
                }
                (_, Some(last)) if last != GENERAL_MERIT => {
                    return Err(SeatMatrixError::config(format!(
                        "fallback chain for '{}' ends with '{}' instead of '{}'",
                        category, last, GENERAL_MERIT
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Resolve a category into the ordered list of columns to consider.
    ///
    /// Known codes return their chain verbatim. Anything else, including
    /// codes that are not real categories, resolves to `[category]`.
    pub fn resolve(&self, category: &str) -> Vec<String> {
        match self.chains.get(category) {
            Some(chain) => chain.clone(),
            None => vec![category.to_string()],
        }
    }

    /// Whether `category` has an entry in the table
    pub fn contains(&self, category: &str) -> bool {
        self.chains.contains_key(category)
    }

    /// Sorted list of the codes that have a chain
    pub fn categories(&self) -> Vec<&str> {
        self.chains.keys().map(String::as_str).collect()
    }

    /// Every code mentioned anywhere in the table (keys and chain members).
    pub fn referenced_columns(&self) -> BTreeSet<&str> {
        self.chains
            .values()
            .flat_map(|chain| chain.iter().map(String::as_str))
            .chain(self.chains.keys().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
