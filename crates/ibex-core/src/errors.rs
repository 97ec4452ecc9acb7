//! Fatal errors raised by the stimuli and results converters.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Details of a fatal conversion failure, carried by every [`IbexError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Short code naming the failing step, e.g. `stimuli-read` or `response-time`.
    pub code: String,
    /// What went wrong, usually the underlying reader or parser message.
    pub message: String,
    /// Where it went wrong: input path, CSV line, result index, field name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix for the input file, when one is obvious.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a failure report for step `code`.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Attaches one location detail.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Records the file a failure relates to.
    pub fn with_path(self, path: &Path) -> Self {
        self.with_context("path", path.display().to_string())
    }

    /// Attaches a suggested fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Failure that aborts a conversion run. Recoverable input problems are
/// reported as diagnostics instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum IbexError {
    /// Missing input files or unwritable outputs.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Malformed delimited text.
    #[error("csv error: {0}")]
    Csv(ErrorInfo),
    /// A stimulus record lacks a field the formatter requires.
    #[error("record error: {0}")]
    Record(ErrorInfo),
    /// Numeric coercion failures.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Unreadable or invalid configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl IbexError {
    /// Details shared by every family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            IbexError::Io(info)
            | IbexError::Csv(info)
            | IbexError::Record(info)
            | IbexError::Parse(info)
            | IbexError::Config(info) => info,
        }
    }

    /// Wraps an I/O failure against `path`.
    pub fn io(code: &str, path: &Path, err: std::io::Error) -> Self {
        IbexError::Io(
            ErrorInfo::new(code, err.to_string())
                .with_path(path)
                .with_context("kind", format!("{:?}", err.kind())),
        )
    }

    /// Wraps a CSV reader or writer failure against `path`.
    pub fn csv(code: &str, path: &Path, err: impl Display) -> Self {
        IbexError::Csv(ErrorInfo::new(code, err.to_string()).with_path(path))
    }
}
