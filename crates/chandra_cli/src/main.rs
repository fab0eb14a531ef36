mod cli;
mod commands;
mod error;
mod logging;
mod replay;

use std::process;

use chandra_dial::{Clock, DialConfig, SystemClock};
use clap::Parser;

use crate::cli::{Cli, Command, MonthArgs};
use crate::commands::Context;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let today = match cli.today.as_deref() {
        Some(s) => commands::parse_date(s)?,
        None => SystemClock.today(),
    };
    let config = match cli.config.as_deref() {
        Some(path) => DialConfig::load(path)?,
        None => DialConfig::default(),
    };
    tracing::debug!(%today, ?config, "starting");
    let ctx = Context { today, config };

    match cli.command {
        Command::Phase { date } => commands::phase(&ctx, date.as_deref()),
        Command::Moonrise { phase, day } => commands::moonrise(&phase, day),
        Command::Month(MonthArgs {
            year,
            month,
            selected,
        }) => commands::month(&ctx, year, month, selected.as_deref()),
        Command::Snap { rotation } => {
            commands::snap(rotation);
            Ok(())
        }
        Command::Animate { from, ticks } => commands::animate(&ctx, from.as_deref(), ticks),
        Command::Replay { from } => commands::replay(&ctx, from.as_deref()),
    }
}
