//! Data models module
//!
//! Defines the travel history: TravelRecord and History.

pub mod travel;

pub use travel::{parse_date, History, TravelRecord};

/// Day-first date format used on disk and on the command line
pub const DATE_FORMAT: &str = "%d/%m/%Y";
