use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use commands::{
    results::{self, ResultsArgs, ResultsReport},
    script::{self, ScriptArgs, ScriptReport},
};
use ibex_core::FeederConfig;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "ibex-feeder",
    about = "Convert stimuli into an Ibex script and clean Ibex results"
)]
struct Cli {
    /// YAML configuration overriding default file names and options.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Write a JSON summary of warnings and row counts to this path.
    #[arg(long, global = true)]
    summary: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert stimuli, then clean results (the default).
    All,
    /// Convert a stimulus spreadsheet into an Ibex script.
    Script(ScriptArgs),
    /// Clean a raw results dump into a CSV table.
    Results(ResultsArgs),
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<ScriptReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<ResultsReport>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => FeederConfig::load(path)?,
        None => FeederConfig::default(),
    };

    let mut summary = RunSummary::default();
    match cli.command.unwrap_or(Command::All) {
        Command::All => {
            summary.script = Some(script::run(&config.script)?);
            summary.results = Some(results::run(&config.results)?);
        }
        Command::Script(args) => {
            summary.script = Some(script::run(&args.apply(config.script))?);
        }
        Command::Results(args) => {
            summary.results = Some(results::run(&args.apply(config.results))?);
        }
    }

    if let Some(path) = &cli.summary {
        write_json(path, &summary)?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
