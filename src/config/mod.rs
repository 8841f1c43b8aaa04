//! Configuration module
//!
//! Handles loading and saving of the expense scale JSON file
//! (`config.json`), kept separate from the travel history.

mod types;

pub use types::{ExpenseScale, Tier};

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ExpenseError, Result};
use crate::history::to_pretty_json;

/// Load the expense scale from a JSON file
pub fn load(path: &Path) -> Result<ExpenseScale> {
    debug!("Config path: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        ExpenseError::Config(format!(
            "Cannot read scale from '{}': {}. Run 'commute-expenses config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let scale: ExpenseScale = serde_json::from_str(&content).map_err(|e| {
        ExpenseError::Config(format!("Invalid scale in '{}': {}", path.display(), e))
    })?;
    scale.validate().map_err(|e| {
        ExpenseError::Config(format!("Invalid scale in '{}': {}", path.display(), e))
    })?;

    info!("Config file loaded in memory.");
    Ok(scale)
}

/// Save the expense scale to a JSON file
pub fn save(scale: &ExpenseScale, path: &Path) -> Result<()> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, to_pretty_json(scale)?)?;
    Ok(())
}
