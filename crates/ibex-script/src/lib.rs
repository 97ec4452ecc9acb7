//! Converts acceptability-judgment stimuli into an Ibex experiment script.

pub mod assemble;
pub mod preamble;
pub mod record;
pub mod template;

pub use assemble::{assemble_records, assemble_script, format_records, write_script, ScriptOptions};
pub use preamble::Preamble;
pub use record::{expected_columns, parse_stimuli, read_stimuli, StimulusRecord};
pub use template::{format_record, TrialTemplate, SECOND_CONTAINER_WIDTH};
