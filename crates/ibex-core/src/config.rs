//! Feeder configuration loaded from YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, IbexError};

/// Shuffle prefix of test conditions when none is configured.
pub const DEFAULT_TEST_PREFIX: &str = "t";
/// Shuffle prefix of filler conditions when none is configured.
pub const DEFAULT_FILLER_PREFIX: &str = "f";

/// YAML-configurable parameters for both pipelines. An empty document
/// reproduces the fixed file names and defaults of the stock tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeederConfig {
    /// Stimuli to script conversion.
    #[serde(default)]
    pub script: ScriptConfig,
    /// Raw results clean-up.
    #[serde(default)]
    pub results: ResultsConfig,
}

impl FeederConfig {
    /// Loads a configuration file, filling absent keys with defaults.
    pub fn load(path: &Path) -> Result<Self, IbexError> {
        let raw =
            fs::read_to_string(path).map_err(|err| IbexError::io("config-read", path, err))?;
        Self::from_yaml(&raw).map_err(|err| match err {
            IbexError::Config(info) => IbexError::Config(info.with_path(path)),
            other => other,
        })
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml(raw: &str) -> Result<Self, IbexError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|err| {
            IbexError::Config(
                ErrorInfo::new("config-parse", "failed to parse feeder configuration")
                    .with_hint(err.to_string()),
            )
        })
    }
}

/// Settings for the stimuli to script pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Stimuli CSV with a header row.
    #[serde(default = "default_script_input")]
    pub input: PathBuf,
    /// Script file handed to the experiment runner.
    #[serde(default = "default_script_output")]
    pub output: PathBuf,
    /// Whether each trial shows a context passage before the target.
    #[serde(default = "default_context")]
    pub context: bool,
    /// Display width of the primary container, in `em`.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Condition prefix shared by test items.
    #[serde(default = "default_test_prefix")]
    pub test_prefix: String,
    /// Condition prefix shared by filler items.
    #[serde(default = "default_filler_prefix")]
    pub filler_prefix: String,
}

fn default_script_input() -> PathBuf {
    PathBuf::from("input.csv")
}

fn default_script_output() -> PathBuf {
    PathBuf::from("ibex_format.txt")
}

fn default_context() -> bool {
    true
}

fn default_width() -> u32 {
    40
}

fn default_test_prefix() -> String {
    DEFAULT_TEST_PREFIX.to_string()
}

fn default_filler_prefix() -> String {
    DEFAULT_FILLER_PREFIX.to_string()
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            input: default_script_input(),
            output: default_script_output(),
            context: default_context(),
            width: default_width(),
            test_prefix: default_test_prefix(),
            filler_prefix: default_filler_prefix(),
        }
    }
}

/// Settings for the results clean-up pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Raw results dump downloaded from the runner.
    #[serde(default = "default_results_input")]
    pub input: PathBuf,
    /// Cleaned CSV table.
    #[serde(default = "default_results_output")]
    pub output: PathBuf,
    /// Drop rows whose response time falls outside `(lower, upper)`.
    #[serde(default = "default_remove_outliers")]
    pub remove_outliers: bool,
    /// Exclusive lower bound on response time, in milliseconds.
    #[serde(default = "default_lower")]
    pub lower: f64,
    /// Exclusive upper bound on response time, in milliseconds.
    #[serde(default = "default_upper")]
    pub upper: f64,
}

fn default_results_input() -> PathBuf {
    PathBuf::from("results.txt")
}

fn default_results_output() -> PathBuf {
    PathBuf::from("result_clean.csv")
}

fn default_remove_outliers() -> bool {
    true
}

fn default_lower() -> f64 {
    3000.0
}

fn default_upper() -> f64 {
    100000.0
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            input: default_results_input(),
            output: default_results_output(),
            remove_outliers: default_remove_outliers(),
            lower: default_lower(),
            upper: default_upper(),
        }
    }
}
