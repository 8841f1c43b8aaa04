use chrono::NaiveDate;
use std::path::Path;
use tracing::warn;

use crate::error::Result;
use crate::history;

/// Remove a recorded day from the history file
pub fn run(history_path: &Path, date: NaiveDate) -> Result<()> {
    let mut history = history::load(history_path)?;

    let removed = history::remove(&mut history, date)?;
    if removed > 1 {
        warn!("{} records shared the same date, all removed.", removed);
    }
    history::save(&history, history_path)?;

    println!("Day successfully removed from history.");
    Ok(())
}
