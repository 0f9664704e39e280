mod cli;
mod config;
mod convert;
mod forecast_cmd;
mod logging;
mod pipeline;
mod range_cmd;
mod retune_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = pipeline::load_config(cli.command.config_path())?;
    logging::init(cli.verbose, &config.logging)?;

    match cli.command {
        Command::Forecast(args) => forecast_cmd::run(args, &config),
        Command::Range(args) => range_cmd::run(args, &config),
        Command::Retune(args) => retune_cmd::run(args, &config),
    }
}
