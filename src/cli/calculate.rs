use std::path::Path;

use crate::calculator::{self, Outcome};
use crate::config;
use crate::display::{self, report};
use crate::error::Result;
use crate::history;

/// Compute the travel expenses to report for a year
pub fn run(
    history_path: &Path,
    config_path: &Path,
    year: i32,
    power: u8,
    details: bool,
) -> Result<()> {
    let history = history::load(history_path)?;
    let scale = config::load(config_path)?;

    match calculator::calculate(&history, &scale, year, power)? {
        Outcome::NoData { year } => {
            println!("No travel recorded for year {}.", year);
        }
        Outcome::Amount(calc) if details => {
            display::print_markdown(&report::calculation(&calc));
        }
        Outcome::Amount(calc) => {
            println!("{}", report::amount_line(&calc));
        }
    }

    Ok(())
}
