use std::path::Path;

use ibex_core::{IbexError, ResultsConfig};
use serde::{Deserialize, Serialize};

use crate::filter::{filter_results, FilterSummary, ResultTable};
use crate::outlier::{remove_outliers, OutlierWindow};

/// Options for the clean-up pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsOptions {
    /// Apply the outlier window after filtering.
    pub remove_outliers: bool,
    pub window: OutlierWindow,
}

impl Default for ResultsOptions {
    fn default() -> Self {
        Self::from(&ResultsConfig::default())
    }
}

impl From<&ResultsConfig> for ResultsOptions {
    fn from(config: &ResultsConfig) -> Self {
        Self {
            remove_outliers: config.remove_outliers,
            window: OutlierWindow::new(config.lower, config.upper),
        }
    }
}

/// Counts reported for one clean-up pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    #[serde(flatten)]
    pub filter: FilterSummary,
    /// Rows dropped by the outlier window; `None` when it was not applied.
    pub outliers_removed: Option<usize>,
    pub written: usize,
}

/// Clean table and the counts describing how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedResults {
    pub table: ResultTable,
    pub summary: CleanSummary,
}

/// Filters the dump at `path` and optionally removes response-time outliers.
pub fn clean_results(
    path: &Path,
    options: &ResultsOptions,
) -> Result<CleanedResults, IbexError> {
    let filtered = filter_results(path)?;
    let before = filtered.table.len();
    let (table, outliers_removed) = if options.remove_outliers {
        let table = remove_outliers(filtered.table, &options.window)?;
        let removed = before - table.len();
        (table, Some(removed))
    } else {
        (filtered.table, None)
    };
    let summary = CleanSummary {
        filter: filtered.summary,
        outliers_removed,
        written: table.len(),
    };
    Ok(CleanedResults { table, summary })
}
