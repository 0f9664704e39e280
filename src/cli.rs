use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use nimbus_calendar::CalendarDate;

/// Nimbus forecast assembly from satellite-proxy regressors.
#[derive(Parser)]
#[command(
    name = "nimbus",
    version,
    about = "Calibrated hourly and daily weather estimates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Forecast a single hour of one date.
    Forecast(ForecastArgs),
    /// Forecast daily aggregates over an inclusive date range.
    Range(RangeArgs),
    /// Re-tune bias offsets against observed values.
    Retune(RetuneArgs),
}

impl Command {
    /// The TOML configuration file named by the subcommand.
    pub fn config_path(&self) -> &Path {
        match self {
            Command::Forecast(args) => &args.config,
            Command::Range(args) => &args.config,
            Command::Retune(args) => &args.config,
        }
    }
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nimbus.toml")]
    pub config: PathBuf,

    /// Target date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: CalendarDate,

    /// Hour of day, 0-23.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
    pub hour: u8,

    /// Print the record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nimbus.toml")]
    pub config: PathBuf,

    /// First date (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: CalendarDate,

    /// Last date, inclusive (YYYY-MM-DD).
    #[arg(short, long)]
    pub end: CalendarDate,

    /// Print the records as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the records as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `retune` subcommand.
#[derive(clap::Args)]
pub struct RetuneArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nimbus.toml")]
    pub config: PathBuf,

    /// JSON file of observed values.
    #[arg(long)]
    pub validation: PathBuf,

    /// Where to write the tuned bias table. Without it, `[data].bias_table`
    /// is replaced in place.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of tuning passes from config.
    #[arg(short, long)]
    pub iterations: Option<usize>,
}
