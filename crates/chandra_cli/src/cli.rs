use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Lunar-calendar moon dial.
#[derive(Parser)]
#[command(name = "chandra", version, about = "Lunar-calendar moon dial")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date.
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Path to a dial TOML config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lunar phase, day and moonrise for a date
    Phase {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Moonrise time and dial angle for a lunar day
    Moonrise {
        /// waxing or waning
        #[arg(long)]
        phase: String,
        /// Lunar day (1-15)
        #[arg(long)]
        day: u8,
    },
    /// Month grid of lunar days
    Month(MonthArgs),
    /// Lunar day a disc rotation snaps to
    Snap {
        /// Disc rotation in degrees
        #[arg(long, allow_hyphen_values = true)]
        rotation: f64,
    },
    /// Auto-advance from a date for a number of ticks
    Animate {
        /// Start date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        from: Option<String>,
        /// Number of ticks to run
        #[arg(long, default_value = "15")]
        ticks: u32,
    },
    /// Read dial events from stdin, one per line, and print each state
    Replay {
        /// Start date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        from: Option<String>,
    },
}

#[derive(Args)]
pub struct MonthArgs {
    /// Year; defaults to the selected date's year
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<i32>,
    /// Month (1-12); defaults to the selected date's month
    #[arg(long)]
    pub month: Option<u32>,
    /// Selected date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub selected: Option<String>,
}
