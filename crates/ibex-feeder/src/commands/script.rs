use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use ibex_core::{Diagnostics, ScriptConfig};
use ibex_script::{assemble_script, write_script, ScriptOptions};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Stimulus CSV with header `condition,item[,context],target`.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output script file.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Stimuli carry no context column.
    #[arg(long)]
    pub no_context: bool,
    /// Primary display width in `em`.
    #[arg(long)]
    pub width: Option<u32>,
    /// Condition prefix of test items.
    #[arg(long)]
    pub test_prefix: Option<String>,
    /// Condition prefix of filler items.
    #[arg(long)]
    pub filler_prefix: Option<String>,
}

impl ScriptArgs {
    /// Overlays command line values on the loaded configuration.
    pub fn apply(self, mut config: ScriptConfig) -> ScriptConfig {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(out) = self.out {
            config.output = out;
        }
        if self.no_context {
            config.context = false;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(prefix) = self.test_prefix {
            config.test_prefix = prefix;
        }
        if let Some(prefix) = self.filler_prefix {
            config.filler_prefix = prefix;
        }
        config
    }
}

#[derive(Debug, Serialize)]
pub struct ScriptReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub warnings: Diagnostics,
}

pub fn run(config: &ScriptConfig) -> Result<ScriptReport, Box<dyn Error>> {
    println!("Converting input format...");
    let options = ScriptOptions::from(config);
    let script = assemble_script(&config.input, &options)?;
    write_script(&script.value, &config.output)?;
    println!(
        "Input file converted to javascript for IbexFarm. File saved as '{}'.",
        config.output.display()
    );
    Ok(ScriptReport {
        input: config.input.clone(),
        output: config.output.clone(),
        warnings: script.diagnostics,
    })
}
