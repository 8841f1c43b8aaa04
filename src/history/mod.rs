//! History persistence module
//!
//! Loads and saves the travel history JSON document
//! (`{"travels": [{"date": "DD/MM/YYYY", "distance": ..}]}`).
//! A missing file is treated as an empty history.
//!
//! Writes are a single `fs::write` with no locking: two processes
//! mutating the same file concurrently will lose one of the updates.

mod records;

pub use records::{add, remove};

use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ExpenseError, Result};
use crate::models::History;

/// Load the history from a JSON file
pub fn load(path: &Path) -> Result<History> {
    debug!("History path: {}", path.display());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("There is no history file yet.");
            return Ok(History::default());
        }
        Err(e) => {
            return Err(ExpenseError::History(format!(
                "Cannot read '{}': {}",
                path.display(),
                e
            )))
        }
    };

    let history: History = serde_json::from_str(&content).map_err(|e| {
        ExpenseError::History(format!("Cannot parse '{}': {}", path.display(), e))
    })?;

    info!(
        "History file loaded in memory ({} travels).",
        history.travels.len()
    );
    Ok(history)
}

/// Save the history to a JSON file
pub fn save(history: &History, path: &Path) -> Result<()> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, to_pretty_json(history)?)?;
    debug!("History modified.");
    Ok(())
}

/// Serialize with a 4-space indent
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
