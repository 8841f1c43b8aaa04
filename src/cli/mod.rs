//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: Record the distance driven on a day
//! - remove: Delete a recorded day
//! - calculate: Compute the expenses to report for a year
//! - list: Show recorded days
//! - config init: Write the default expense scale
pub mod add;
pub mod calculate;
pub mod config;
pub mod list;
pub mod remove;
