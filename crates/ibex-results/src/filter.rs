//! Selection and projection of judgment rows from a raw results dump.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use ibex_core::{ErrorInfo, IbexError};
use serde::{Deserialize, Serialize};

/// Controller name carried by acceptability-judgment rows.
pub const JUDGMENT_MARKER: &str = "AcceptabilityJudgment";
/// Field count of a judgment row in the results dump.
pub const RESULT_ARITY: usize = 11;

const SUBJECT: usize = 0;
const CONTROLLER: usize = 2;
const ITEM: usize = 3;
const CONDITION: usize = 5;
const RESPONSE: usize = 8;
const RESPONSE_TIME: usize = 10;

/// Output column names, in order.
pub const RESULT_COLUMNS: [&str; 5] = [
    "subject",
    "item",
    "condition",
    "response",
    "response_time",
];

/// One judgment projected to the five fields kept for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub subject: String,
    pub item: String,
    pub condition: String,
    pub response: String,
    /// Milliseconds as written in the dump; parsed only for outlier removal.
    pub response_time: String,
}

impl ResultRow {
    pub fn to_record(&self) -> [&str; 5] {
        [
            self.subject.as_str(),
            self.item.as_str(),
            self.condition.as_str(),
            self.response.as_str(),
            self.response_time.as_str(),
        ]
    }
}

/// A projected row and its position among all projected rows. The position
/// survives later filtering and becomes the index column of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub index: usize,
    pub row: ResultRow,
}

/// Ordered table of projected judgment rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    pub entries: Vec<TableEntry>,
}

impl ResultTable {
    /// Numbers `rows` from zero in order.
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        Self {
            entries: rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| TableEntry { index, row })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.entries.iter().map(|entry| &entry.row)
    }
}

/// Row counts observed while filtering a dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub rows_read: usize,
    /// Rows without exactly [`RESULT_ARITY`] fields.
    pub wrong_arity: usize,
    /// Rows of the right arity belonging to another controller.
    pub other_events: usize,
    pub retained: usize,
}

/// Projected judgment rows together with the filter counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredResults {
    pub table: ResultTable,
    pub summary: FilterSummary,
}

/// Projects a raw row when it is a judgment row, `None` otherwise.
pub fn project_row(record: &StringRecord) -> Option<ResultRow> {
    if record.len() != RESULT_ARITY || record.get(CONTROLLER) != Some(JUDGMENT_MARKER) {
        return None;
    }
    let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
    Some(ResultRow {
        subject: field(SUBJECT),
        item: field(ITEM),
        condition: field(CONDITION),
        response: field(RESPONSE),
        response_time: field(RESPONSE_TIME),
    })
}

/// Reads the results dump at `path` and keeps its judgment rows.
pub fn filter_results(path: &Path) -> Result<FilteredResults, IbexError> {
    let raw =
        fs::read_to_string(path).map_err(|err| IbexError::io("results-read", path, err))?;
    parse_results(&raw).map_err(|err| match err {
        IbexError::Csv(info) => IbexError::Csv(info.with_path(path)),
        other => other,
    })
}

/// Filters results text. The dump has no header row; a leading
/// byte-order mark is ignored.
pub fn parse_results(raw: &str) -> Result<FilteredResults, IbexError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    let mut summary = FilterSummary::default();
    for result in reader.records() {
        let record = result.map_err(|err| {
            let mut info = ErrorInfo::new("results-record", err.to_string());
            if let Some(position) = err.position() {
                info = info.with_context("line", position.line().to_string());
            }
            IbexError::Csv(info)
        })?;
        summary.rows_read += 1;
        match project_row(&record) {
            Some(row) => rows.push(row),
            None if record.len() != RESULT_ARITY => summary.wrong_arity += 1,
            None => summary.other_events += 1,
        }
    }
    summary.retained = rows.len();
    tracing::debug!(
        rows_read = summary.rows_read,
        retained = summary.retained,
        "filtered results dump"
    );
    Ok(FilteredResults {
        table: ResultTable::from_rows(rows),
        summary,
    })
}
