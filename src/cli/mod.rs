//! Command-line interface definitions.

pub mod check;
pub mod diagnostic;
pub mod models;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Default configuration file, used when present.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// fplopt - Fantasy football squad optimiser.
#[derive(Parser, Debug)]
#[command(name = "fplopt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select a squad and starting XI from the latest data
    Run(RunArgs),

    /// Validate a configuration file
    Check(ConfigPathArg),

    /// List expected points models
    Models,
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Path to configuration file (defaults apply if omitted and config.toml is absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override data directory (dumps are read from <data-dir>/raw)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Override output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Override squad budget
    #[arg(long)]
    pub budget: Option<Decimal>,

    /// Override expected points model (direct, blend)
    #[arg(long)]
    pub model: Option<String>,

    /// Override maximum players per team
    #[arg(long)]
    pub max_per_team: Option<u32>,

    /// Override solver time limit in seconds (0 = unlimited)
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Print only the run summary as JSON
    #[arg(long)]
    pub json: bool,
}
