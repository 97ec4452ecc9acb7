//! Stimulus rows read from the item spreadsheet.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use ibex_core::{Checked, Diagnostic, DiagnosticKind, Diagnostics, ErrorInfo, IbexError};
use indexmap::IndexMap;

/// Field count of a stimulus row carrying a context passage.
pub const CONTEXT_COLUMNS: usize = 4;
/// Field count of a stimulus row without a context passage.
pub const PLAIN_COLUMNS: usize = 3;

/// Number of columns a row must carry in the given mode.
pub fn expected_columns(context: bool) -> usize {
    if context {
        CONTEXT_COLUMNS
    } else {
        PLAIN_COLUMNS
    }
}

/// One stimulus row: header-named fields in file order, plus any values
/// that ran past the end of the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimulusRecord {
    fields: IndexMap<String, String>,
    extra: Vec<String>,
}

impl StimulusRecord {
    /// Builds a record from `(name, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            extra: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Named fields in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values with no matching header column.
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Total number of fields, named or not.
    pub fn field_count(&self) -> usize {
        self.fields.len() + self.extra.len()
    }
}

/// Reads the stimulus spreadsheet at `path`.
///
/// The first row names the fields. Every data row becomes a record in file
/// order; rows whose field count does not match the mode still come back,
/// with a [`DiagnosticKind::ColumnCount`] diagnostic attached. A row shorter
/// than the header gets an empty value for every header field it lacks.
pub fn read_stimuli(
    path: &Path,
    context: bool,
) -> Result<Checked<Vec<StimulusRecord>>, IbexError> {
    let raw =
        fs::read_to_string(path).map_err(|err| IbexError::io("stimuli-read", path, err))?;
    parse_stimuli(&raw, context).map_err(|err| match err {
        IbexError::Csv(info) => IbexError::Csv(info.with_path(path)),
        other => other,
    })
}

/// Parses stimulus rows from CSV text. A leading byte-order mark is ignored.
pub fn parse_stimuli(
    raw: &str,
    context: bool,
) -> Result<Checked<Vec<StimulusRecord>>, IbexError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|err| csv_error("stimuli-header", err))?
        .clone();

    let expected = expected_columns(context);
    let mut records = Vec::new();
    let mut diagnostics = Diagnostics::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result.map_err(|err| csv_error("stimuli-record", err))?;
        let mut record = StimulusRecord::default();
        for (pos, value) in row.iter().enumerate() {
            match headers.get(pos) {
                Some(name) => {
                    record.fields.insert(name.to_string(), value.to_string());
                }
                None => record.extra.push(value.to_string()),
            }
        }
        // Header fields a short row lacks are kept as empty values.
        for name in headers.iter().skip(row.len()) {
            record.fields.insert(name.to_string(), String::new());
        }
        let found = row.len();
        if found != expected {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::ColumnCount,
                Some(idx + 1),
                expected,
                found,
                "wrong number of columns in input csv",
            ));
        }
        records.push(record);
    }
    Ok(Checked::new(records, diagnostics))
}

fn csv_error(code: &str, err: csv::Error) -> IbexError {
    let mut info = ErrorInfo::new(code, err.to_string());
    if let Some(position) = err.position() {
        info = info.with_context("line", position.line().to_string());
    }
    IbexError::Csv(info)
}
