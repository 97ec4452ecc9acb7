use std::fs;
use std::path::Path;

use ibex_core::{Checked, Diagnostics, IbexError, ScriptConfig};

use crate::preamble::Preamble;
use crate::record::{read_stimuli, StimulusRecord};
use crate::template::{format_record, FRAGMENT_SEPARATOR};

/// Options shaping the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Render a context passage before each target.
    pub context: bool,
    /// Primary container width in `em`.
    pub width: u32,
    /// Shuffle prefix for test conditions.
    pub test_prefix: String,
    /// Shuffle prefix for filler conditions.
    pub filler_prefix: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self::from(&ScriptConfig::default())
    }
}

impl From<&ScriptConfig> for ScriptOptions {
    fn from(config: &ScriptConfig) -> Self {
        Self {
            context: config.context,
            width: config.width,
            test_prefix: config.test_prefix.clone(),
            filler_prefix: config.filler_prefix.clone(),
        }
    }
}

impl ScriptOptions {
    fn preamble(&self) -> Preamble<'_> {
        Preamble {
            test_prefix: &self.test_prefix,
            filler_prefix: &self.filler_prefix,
        }
    }
}

/// Formats every record in order and joins the fragments. The separator
/// after the final fragment is dropped so the result closes the item list.
pub fn format_records(
    records: &[StimulusRecord],
    options: &ScriptOptions,
) -> Result<Checked<String>, IbexError> {
    let mut body = String::new();
    let mut diagnostics = Diagnostics::new();
    for record in records {
        let fragment = format_record(record, options.context, options.width)?;
        body.push_str(&fragment.value);
        diagnostics.extend(fragment.diagnostics);
    }
    if body.ends_with(FRAGMENT_SEPARATOR) {
        body.truncate(body.len() - FRAGMENT_SEPARATOR.len());
    }
    Ok(Checked::new(body, diagnostics))
}

/// Builds the full script for in-memory records: preamble, then fragments.
pub fn assemble_records(
    records: &[StimulusRecord],
    options: &ScriptOptions,
) -> Result<Checked<String>, IbexError> {
    let body = format_records(records, options)?;
    let mut script = options.preamble().render();
    script.push_str(&body.value);
    Ok(Checked::new(script, body.diagnostics))
}

/// Reads the stimulus file at `path` and builds the full script.
pub fn assemble_script(
    path: &Path,
    options: &ScriptOptions,
) -> Result<Checked<String>, IbexError> {
    let records = read_stimuli(path, options.context)?;
    let script = assemble_records(&records.value, options)?;
    let mut diagnostics = records.diagnostics;
    diagnostics.extend(script.diagnostics);
    tracing::debug!(
        path = %path.display(),
        records = records.value.len(),
        warnings = diagnostics.len(),
        "assembled script"
    );
    Ok(Checked::new(script.value, diagnostics))
}

/// Writes the script to `path`, replacing any previous file.
pub fn write_script(script: &str, path: &Path) -> Result<(), IbexError> {
    fs::write(path, script).map_err(|err| IbexError::io("script-write", path, err))
}
