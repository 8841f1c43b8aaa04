use std::path::Path;

use crate::config::{self, ExpenseScale};
use crate::error::Result;

/// Write the default expense scale to a config file
pub fn init(path: &Path) -> Result<()> {
    // Check if file already exists
    if path.exists() {
        eprintln!("Configuration file already exists at: {}", path.display());
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&ExpenseScale::default(), path)?;

    println!("Configuration file created: {}", path.display());
    println!(
        "Check the scale values in {} against this year's official scale.",
        path.display()
    );

    Ok(())
}
