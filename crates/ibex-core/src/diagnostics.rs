//! Non-fatal diagnostics collected while converting malformed input.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Category of a recoverable input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A stimulus row does not carry the column count expected for the mode.
    ColumnCount,
    /// A record formatted without context carries a field count other than
    /// three. Surplus fields are ignored; short records format what they have.
    ExcessFields,
}

impl DiagnosticKind {
    fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::ColumnCount => "column_count",
            DiagnosticKind::ExcessFields => "excess_fields",
        }
    }
}

/// One recoverable problem. Processing continues past every diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Problem category.
    pub kind: DiagnosticKind,
    /// 1-based data row in the source file, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Field count the current mode expects.
    pub expected: usize,
    /// Field count actually observed.
    pub found: usize,
    /// Human readable description.
    pub message: String,
}

impl Diagnostic {
    /// Builds a diagnostic for a field count that differs from `expected`.
    pub fn new(
        kind: DiagnosticKind,
        row: Option<usize>,
        expected: usize,
        found: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            row,
            expected,
            found,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.as_str())?;
        if let Some(row) = self.row {
            write!(f, " at row {row}")?;
        }
        write!(
            f,
            ": {} (expected {}, found {})",
            self.message, self.expected, self.found
        )
    }
}

/// Ordered collection of diagnostics returned alongside converted output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and emits it as a warning event.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = diagnostic.kind.as_str(),
            row = diagnostic.row,
            expected = diagnostic.expected,
            found = diagnostic.found,
            "{}",
            diagnostic.message
        );
        self.0.push(diagnostic);
    }

    /// Appends diagnostics that were already reported elsewhere.
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Number of diagnostics recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the input raised no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Diagnostics in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.0.iter().filter(|d| d.kind == kind).count()
    }
}

/// A converted value together with the diagnostics raised producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    /// Converted output, produced even when diagnostics were raised.
    pub value: T,
    /// Recoverable problems met while producing `value`.
    pub diagnostics: Diagnostics,
}

impl<T> Checked<T> {
    /// Pairs `value` with its diagnostics.
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }
}
