use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of cumulative-distance bands per fiscal power
pub const TIER_COUNT: usize = 3;

/// One band of the scale: `expense = distance * coeff + term`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub coeff: f64,
    pub term: f64,
}

/// Expense scale, keyed by vehicle fiscal power
///
/// Serialized as `{"<power>": [{"coeff": .., "term": ..}, ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseScale {
    pub powers: BTreeMap<u8, Vec<Tier>>,
}

impl Tier {
    pub const fn new(coeff: f64, term: f64) -> Self {
        Self { coeff, term }
    }
}

impl ExpenseScale {
    /// Tier lookup for a power, `None` if either is missing
    pub fn tier(&self, power: u8, index: usize) -> Option<Tier> {
        self.powers.get(&power)?.get(index).copied()
    }

    /// Check every power has exactly three finite tiers
    pub fn validate(&self) -> Result<(), String> {
        if self.powers.is_empty() {
            return Err("scale defines no fiscal power".to_string());
        }

        for (power, tiers) in &self.powers {
            if tiers.len() != TIER_COUNT {
                return Err(format!(
                    "power {} has {} tiers, expected {}",
                    power,
                    tiers.len(),
                    TIER_COUNT
                ));
            }
            if tiers
                .iter()
                .any(|t| !t.coeff.is_finite() || !t.term.is_finite())
            {
                return Err(format!("power {} has a non-numeric tier", power));
            }
        }

        Ok(())
    }
}

impl Default for ExpenseScale {
    /// 2024 French mileage scale for cars ("7" covers 7 CV and more)
    fn default() -> Self {
        let powers = BTreeMap::from([
            (
                3,
                vec![
                    Tier::new(0.529, 0.0),
                    Tier::new(0.316, 1065.0),
                    Tier::new(0.370, 0.0),
                ],
            ),
            (
                4,
                vec![
                    Tier::new(0.606, 0.0),
                    Tier::new(0.340, 1330.0),
                    Tier::new(0.407, 0.0),
                ],
            ),
            (
                5,
                vec![
                    Tier::new(0.636, 0.0),
                    Tier::new(0.357, 1395.0),
                    Tier::new(0.427, 0.0),
                ],
            ),
            (
                6,
                vec![
                    Tier::new(0.665, 0.0),
                    Tier::new(0.374, 1457.0),
                    Tier::new(0.447, 0.0),
                ],
            ),
            (
                7,
                vec![
                    Tier::new(0.697, 0.0),
                    Tier::new(0.394, 1515.0),
                    Tier::new(0.470, 0.0),
                ],
            ),
        ]);

        Self { powers }
    }
}
