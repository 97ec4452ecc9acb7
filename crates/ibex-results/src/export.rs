use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use ibex_core::{ErrorInfo, IbexError};

use crate::filter::{ResultRow, ResultTable, TableEntry, RESULT_COLUMNS};

/// Writes `table` as CSV with a leading unnamed index column, replacing any
/// previous file at `out_path`.
pub fn write_results(table: &ResultTable, out_path: &Path) -> Result<(), IbexError> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(out_path)
        .map_err(|err| IbexError::csv("results-export", out_path, err))?;
    let mut header = vec![""];
    header.extend(RESULT_COLUMNS);
    wtr.write_record(&header)
        .map_err(|err| IbexError::csv("results-export", out_path, err))?;
    for entry in &table.entries {
        let index = entry.index.to_string();
        let mut record = vec![index.as_str()];
        record.extend(entry.row.to_record());
        wtr.write_record(&record)
            .map_err(|err| IbexError::csv("results-export", out_path, err))?;
    }
    wtr.flush()
        .map_err(|err| IbexError::io("results-export", out_path, err))
}

/// Reads a table previously written by [`write_results`].
pub fn read_results(path: &Path) -> Result<ResultTable, IbexError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|err| IbexError::csv("results-import", path, err))?;
    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| IbexError::csv("results-import", path, err))?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        let index = field(0).parse::<usize>().map_err(|err| {
            IbexError::Parse(
                ErrorInfo::new("results-index", err.to_string())
                    .with_path(path)
                    .with_context("value", field(0)),
            )
        })?;
        entries.push(TableEntry {
            index,
            row: ResultRow {
                subject: field(1),
                item: field(2),
                condition: field(3),
                response: field(4),
                response_time: field(5),
            },
        });
    }
    Ok(ResultTable { entries })
}
