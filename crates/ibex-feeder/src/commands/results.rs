use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use ibex_core::ResultsConfig;
use ibex_results::{clean_results, write_results, CleanSummary, ResultsOptions};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ResultsArgs {
    /// Raw results dump downloaded from Ibex.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output CSV table.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Keep rows with extreme response times.
    #[arg(long)]
    pub keep_outliers: bool,
    /// Exclusive lower response-time bound, in milliseconds.
    #[arg(long)]
    pub lower: Option<f64>,
    /// Exclusive upper response-time bound, in milliseconds.
    #[arg(long)]
    pub upper: Option<f64>,
}

impl ResultsArgs {
    pub fn apply(self, mut config: ResultsConfig) -> ResultsConfig {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(out) = self.out {
            config.output = out;
        }
        if self.keep_outliers {
            config.remove_outliers = false;
        }
        if let Some(lower) = self.lower {
            config.lower = lower;
        }
        if let Some(upper) = self.upper {
            config.upper = upper;
        }
        config
    }
}

#[derive(Debug, Serialize)]
pub struct ResultsReport {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub counts: CleanSummary,
}

pub fn run(config: &ResultsConfig) -> Result<ResultsReport, Box<dyn Error>> {
    let options = ResultsOptions::from(config);
    let cleaned = clean_results(&config.input, &options)?;
    if options.remove_outliers {
        println!("Tokens with extreme response times are removed.");
    } else {
        println!("Tokens with extreme response times are NOT removed.");
    }
    write_results(&cleaned.table, &config.output)?;
    println!("Clean result saved as '{}'.", config.output.display());
    Ok(ResultsReport {
        input: config.input.clone(),
        output: config.output.clone(),
        counts: cleaned.summary,
    })
}
