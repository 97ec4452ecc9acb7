use ibex_core::{ErrorInfo, IbexError, ResultsConfig};

use crate::filter::ResultTable;

/// Open interval of plausible response times, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierWindow {
    /// Exclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound.
    pub upper: f64,
}

impl Default for OutlierWindow {
    fn default() -> Self {
        let config = ResultsConfig::default();
        Self::new(config.lower, config.upper)
    }
}

impl OutlierWindow {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// True when `value` lies strictly inside the window.
    pub fn contains(&self, value: f64) -> bool {
        self.lower < value && value < self.upper
    }
}

/// Parses a response time as written in the results dump.
pub fn parse_response_time(raw: &str) -> Result<f64, IbexError> {
    raw.trim().parse::<f64>().map_err(|err| {
        IbexError::Parse(
            ErrorInfo::new("response-time", err.to_string())
                .with_context("value", raw)
                .with_hint("response_time must be numeric"),
        )
    })
}

/// Drops rows whose response time lies outside `window`.
///
/// Every response time is parsed before any row is dropped, so a single
/// non-numeric value fails the whole table. Order and indices are kept.
pub fn remove_outliers(
    table: ResultTable,
    window: &OutlierWindow,
) -> Result<ResultTable, IbexError> {
    let mut timed = Vec::with_capacity(table.len());
    for entry in table.entries {
        let value = parse_response_time(&entry.row.response_time).map_err(|err| match err {
            IbexError::Parse(info) => {
                IbexError::Parse(info.with_context("index", entry.index.to_string()))
            }
            other => other,
        })?;
        timed.push((value, entry));
    }
    let entries = timed
        .into_iter()
        .filter(|(value, _)| window.contains(*value))
        .map(|(_, entry)| entry)
        .collect();
    Ok(ResultTable { entries })
}
