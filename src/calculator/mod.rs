//! Expense calculation module
//!
//! Sums the capped daily distances of a calendar year, picks the
//! scale tier for that cumulation and applies `cumulation * coeff + term`.

use tracing::{debug, warn};

use crate::config::{ExpenseScale, Tier};
use crate::error::{ExpenseError, Result};
use crate::models::{History, TravelRecord};

/// Deductible distance ceiling for a single day, in kilometers
pub const MAX_DAILY_DISTANCE: f64 = 40.0;

/// Upper bound (inclusive) of the first tier
pub const KM_MIN: f64 = 5000.0;

/// Upper bound (inclusive) of the second tier
pub const KM_MAX: f64 = 20000.0;

/// Result of an expense calculation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No travel recorded for the requested year
    NoData { year: i32 },
    Amount(Calculation),
}

/// Details of a computed expense
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub year: i32,
    pub power: u8,
    /// Number of recorded days in the year
    pub days: usize,
    /// Sum of capped daily distances
    pub cumulation: f64,
    pub tier_index: usize,
    pub tier: Tier,
    pub amount: f64,
}

/// Compute the travel expenses of `year` for a vehicle of fiscal `power`
pub fn calculate(
    history: &History,
    scale: &ExpenseScale,
    year: i32,
    power: u8,
) -> Result<Outcome> {
    debug!("Year: {}, Horsepower: {}.", year, power);

    let travels = select_year(history, year);
    if travels.is_empty() {
        warn!("There is no record for year: {}.", year);
        return Ok(Outcome::NoData { year });
    }

    let cumulation = cumulate(&travels);
    debug!("Cumulation: {}km in {}.", cumulation, year);

    let tier_index = tier_index(cumulation);
    let tier = scale.tier(power, tier_index).ok_or_else(|| {
        ExpenseError::Config(format!(
            "no tier {} for fiscal power {} in the expense scale",
            tier_index, power
        ))
    })?;
    debug!("Coefficient found: {}, Term found: {}.", tier.coeff, tier.term);

    Ok(Outcome::Amount(Calculation {
        year,
        power,
        days: travels.len(),
        cumulation,
        tier_index,
        tier,
        amount: expense(cumulation, tier),
    }))
}

/// Records whose calendar year is `year`
pub fn select_year(history: &History, year: i32) -> Vec<&TravelRecord> {
    history.in_year(year).collect()
}

/// Deductible distance of one day
pub fn capped(distance: f64) -> f64 {
    distance.min(MAX_DAILY_DISTANCE)
}

/// Sum of capped daily distances
pub fn cumulate(travels: &[&TravelRecord]) -> f64 {
    travels.iter().map(|t| capped(t.distance)).sum()
}

/// Scale tier for a yearly cumulation
pub fn tier_index(cumulation: f64) -> usize {
    if cumulation <= KM_MIN {
        0
    } else if cumulation <= KM_MAX {
        1
    } else {
        2
    }
}

pub fn expense(cumulation: f64, tier: Tier) -> f64 {
    cumulation * tier.coeff + tier.term
}
