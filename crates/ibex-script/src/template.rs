//! Per-trial script fragments.

use std::fmt::{self, Display};

use ibex_core::{Checked, Diagnostic, DiagnosticKind, Diagnostics, ErrorInfo, IbexError};

use crate::record::{StimulusRecord, PLAIN_COLUMNS};

/// Width of the container that holds the target after a context passage.
/// Independent of the configurable primary width.
pub const SECOND_CONTAINER_WIDTH: u32 = 40;

/// Separator closing every rendered fragment.
pub const FRAGMENT_SEPARATOR: &str = ",\n";

/// Named parameters of one acceptability-judgment trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialTemplate<'a> {
    /// Condition label, emitted quoted.
    pub condition: &'a str,
    /// Item number, emitted unquoted.
    pub item: &'a str,
    /// Context passage shown above the target, if any.
    pub context: Option<&'a str>,
    /// Sentence to be judged.
    pub target: &'a str,
    /// Primary container width in `em`.
    pub width: u32,
}

impl TrialTemplate<'_> {
    /// Renders the fragment including its trailing separator.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for TrialTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"[["{}",{}], q,{{s: {{html: "<div style='width: {}em;'>"#,
            self.condition, self.item, self.width
        )?;
        if let Some(context) = self.context {
            write!(
                f,
                " <b>Context:</b>{context}</div><div style='width: {SECOND_CONTAINER_WIDTH}em;'><p></p>"
            )?;
        }
        write!(
            f,
            r#"<b>Target:</b>{}</div>"}}}}]{FRAGMENT_SEPARATOR}"#,
            self.target
        )
    }
}

/// Formats one record as a trial fragment.
///
/// A record whose header does not name a required field is rejected. In
/// no-context mode a record with any field count other than three is still
/// formatted, with an [`DiagnosticKind::ExcessFields`] diagnostic; surplus
/// fields are ignored.
pub fn format_record(
    record: &StimulusRecord,
    context: bool,
    width: u32,
) -> Result<Checked<String>, IbexError> {
    let mut diagnostics = Diagnostics::new();
    let found = record.field_count();
    if !context && found != PLAIN_COLUMNS {
        let message = if found > PLAIN_COLUMNS {
            format!("stimulus record has {found} fields; the surplus is ignored")
        } else {
            format!("stimulus record has only {found} fields")
        };
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::ExcessFields,
            None,
            PLAIN_COLUMNS,
            found,
            message,
        ));
    }
    let context_text = if context {
        Some(required(record, "context")?)
    } else {
        None
    };
    let template = TrialTemplate {
        condition: required(record, "condition")?,
        item: required(record, "item")?,
        context: context_text,
        target: required(record, "target")?,
        width,
    };
    Ok(Checked::new(template.render(), diagnostics))
}

fn required<'a>(record: &'a StimulusRecord, field: &str) -> Result<&'a str, IbexError> {
    record.get(field).ok_or_else(|| {
        IbexError::Record(
            ErrorInfo::new("record-field", "stimulus record is missing a required field")
                .with_context("field", field)
                .with_context("fields", record.field_count().to_string())
                .with_hint("expected columns: condition,item[,context],target"),
        )
    })
}
