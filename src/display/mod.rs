//! Terminal display module
//!
//! Builds markdown reports and prints them with rich formatting when
//! stdout supports it.

mod formatter;
pub mod report;
mod terminal;

pub use formatter::print_markdown;
