#![deny(missing_docs)]
#![doc = "Shared error taxonomy, non-fatal diagnostics and configuration for the Ibex feeder pipelines."]

pub mod config;
pub mod diagnostics;
pub mod errors;

pub use config::{
    FeederConfig, ResultsConfig, ScriptConfig, DEFAULT_FILLER_PREFIX, DEFAULT_TEST_PREFIX,
};
pub use diagnostics::{Checked, Diagnostic, DiagnosticKind, Diagnostics};
pub use errors::{ErrorInfo, IbexError};
