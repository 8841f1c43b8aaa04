use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single day of commute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// Day of the travel (DD/MM/YYYY on disk)
    #[serde(with = "day_format")]
    pub date: NaiveDate,
    /// Total distance driven that day, in kilometers
    pub distance: f64,
}

/// Every recorded day, as persisted in the history file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub travels: Vec<TravelRecord>,
}

impl TravelRecord {
    pub fn new(date: NaiveDate, distance: f64) -> Self {
        Self { date, distance }
    }
}

impl History {
    /// Whether a record exists for the given day
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.travels.iter().any(|t| t.date == date)
    }

    /// Records falling within a calendar year
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = &TravelRecord> {
        self.travels.iter().filter(move |t| t.date.year() == year)
    }

    /// Records sorted by date, for display
    pub fn sorted(&self) -> Vec<&TravelRecord> {
        let mut travels: Vec<&TravelRecord> = self.travels.iter().collect();
        travels.sort_by_key(|t| t.date);
        travels
    }
}

/// Parse a user supplied DD/MM/YYYY date
pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), super::DATE_FORMAT)
        .map_err(|e| format!("'{}' is not a DD/MM/YYYY date: {}", value, e))
}

mod day_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
