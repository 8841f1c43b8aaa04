//! Markdown reports for calculations and history listings

use crate::calculator::{self, Calculation};
use crate::models::{TravelRecord, DATE_FORMAT};

/// One-line summary printed after a calculation
pub fn amount_line(calc: &Calculation) -> String {
    format!("The amount to report is {:.2}€.", calc.amount)
}

/// Detailed breakdown of a calculation
pub fn calculation(calc: &Calculation) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Travel expenses {}\n\n", calc.year));
    md.push_str("|:-|-:|\n");
    md.push_str(&format!("|**Fiscal power**|{} CV|\n", calc.power));
    md.push_str(&format!("|**Days recorded**|{}|\n", calc.days));
    md.push_str(&format!("|**Cumulation**|{:.2} km|\n", calc.cumulation));
    md.push_str(&format!(
        "|**Scale**|tier {}: d × {} + {}|\n",
        calc.tier_index + 1,
        calc.tier.coeff,
        calc.tier.term
    ));
    md.push_str("|-\n\n");
    md.push_str(&amount_line(calc));
    md.push('\n');

    md
}

/// Table of recorded days with their deductible distance
pub fn travels(title: &str, travels: &[&TravelRecord]) -> String {
    let mut md = format!("# {}\n\n", title);

    if travels.is_empty() {
        md.push_str("No travel recorded.\n");
        return md;
    }

    md.push_str("|:-:|-:|-:|\n");
    md.push_str("|**Date**|**Distance**|**Deductible**|\n");
    md.push_str("|-:|-:|-:|\n");

    let mut total = 0.0;
    for travel in travels {
        let deductible = calculator::capped(travel.distance);
        total += deductible;
        md.push_str(&format!(
            "|{}|{} km|{} km|\n",
            travel.date.format(DATE_FORMAT),
            travel.distance,
            deductible
        ));
    }
    md.push_str("|-\n\n");
    md.push_str(&format!(
        "**{}** days, **{:.2} km** deductible.\n",
        travels.len(),
        total
    ));

    md
}
