use std::path::Path;

use crate::display::{self, report};
use crate::error::Result;
use crate::history;

/// Display recorded days, optionally restricted to a year
pub fn run(history_path: &Path, year: Option<i32>) -> Result<()> {
    let history = history::load(history_path)?;

    let markdown = match year {
        Some(year) => {
            let mut travels: Vec<_> = history.in_year(year).collect();
            travels.sort_by_key(|t| t.date);
            report::travels(&format!("History {}", year), &travels)
        }
        None => report::travels("History", &history.sorted()),
    };

    display::print_markdown(&markdown);
    Ok(())
}
