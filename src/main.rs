mod calculator;
mod cli;
mod config;
mod display;
mod error;
mod history;
mod logging;
mod models;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "commute-expenses")]
#[command(about = "Record work trips and compute the travel expenses to report", long_about = None)]
struct Cli {
    /// Set verbosity level: [-v|-vv|-vvv]
    #[arg(short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// History file
    #[arg(long, default_value = "work_trip.json", global = true)]
    history_name: PathBuf,

    /// Expense scale file
    #[arg(long = "config", default_value = "config.json", global = true)]
    config_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new day of work trip (total distance that day)
    Add {
        /// Date in dd/mm/yyyy format
        #[arg(long, value_parser = models::parse_date)]
        date: NaiveDate,

        /// Total distance traveled in km this day
        #[arg(long, value_parser = parse_distance)]
        distance: f64,
    },
    /// Remove a day recorded in history file
    Remove {
        /// Date in dd/mm/yyyy format
        #[arg(long, value_parser = models::parse_date)]
        date: NaiveDate,
    },
    /// Return the amount to report for the given year
    Calculate {
        /// Year in yyyy format
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: i32,

        /// Fiscal power of the vehicle
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=7))]
        power: u8,

        /// Print the full breakdown instead of the amount only
        #[arg(long)]
        details: bool,
    },
    /// Show recorded days
    List {
        /// Only show days of this year
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Write the default expense scale file
    Init {
        /// Path where to create the config file (defaults to --config)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Distance in km, finite and non-negative
fn parse_distance(value: &str) -> Result<f64, String> {
    let distance: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;

    if !distance.is_finite() || distance < 0.0 {
        return Err(format!("'{}' is not a valid distance", value));
    }
    Ok(distance)
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    debug!("Parsed argument: {:?}.", cli);

    let result = match cli.command {
        Commands::Add { date, distance } => cli::add::run(&cli.history_name, date, distance),
        Commands::Remove { date } => cli::remove::run(&cli.history_name, date),
        Commands::Calculate {
            year,
            power,
            details,
        } => cli::calculate::run(&cli.history_name, &cli.config_path, year, power, details),
        Commands::List { year } => cli::list::run(&cli.history_name, year),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => {
                cli::config::init(&path.unwrap_or_else(|| cli.config_path.clone()))
            }
        },
    };

    if let Err(e) = result {
        debug!("Exiting with code 1, message: {}.", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
