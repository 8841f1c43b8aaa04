use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{ExpenseError, Result};
use crate::models::{History, TravelRecord};

/// Record a new day, at most one per date
pub fn add(history: &mut History, date: NaiveDate, distance: f64) -> Result<()> {
    debug!("Date: {}, Distance: {}.", date, distance);

    if history.contains(date) {
        return Err(ExpenseError::DuplicateDate(date));
    }

    history.travels.push(TravelRecord::new(date, distance));
    info!("Travel recorded in history.");
    Ok(())
}

/// Remove every record for a date, returning how many were dropped
pub fn remove(history: &mut History, date: NaiveDate) -> Result<usize> {
    debug!("Date: {}.", date);

    let before = history.travels.len();
    history.travels.retain(|t| t.date != date);
    let removed = before - history.travels.len();

    if removed == 0 {
        return Err(ExpenseError::NotFound(date));
    }

    info!("Travel removed from history.");
    Ok(removed)
}
