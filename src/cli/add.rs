use chrono::NaiveDate;
use std::path::Path;

use crate::error::Result;
use crate::history;

/// Record a new day of commute in the history file
pub fn run(history_path: &Path, date: NaiveDate, distance: f64) -> Result<()> {
    let mut history = history::load(history_path)?;

    history::add(&mut history, date, distance)?;
    history::save(&history, history_path)?;

    println!("New day successfully added in history.");
    Ok(())
}
