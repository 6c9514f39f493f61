use crate::types::{LogLevel, OutputFormat, StepDirection};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daygrid")]
#[command(about = "Month-grid calendar picker for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $DAYGRID_CONFIG or <config dir>/daygrid/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a month grid
    Show {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long)]
        year: Option<i32>,

        /// Fill blank slots with the neighbouring months' days
        #[arg(long)]
        adjacent: bool,

        /// Date to select (YYYY-MM-DD)
        #[arg(long)]
        select: Option<NaiveDate>,
    },

    /// Print the month before or after the given one
    Step {
        direction: StepDirection,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[arg(long)]
        year: i32,
    },

    /// Pick a date interactively
    Pick {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long)]
        year: Option<i32>,

        /// Fill blank slots with the neighbouring months' days
        #[arg(long)]
        adjacent: bool,
    },
}
