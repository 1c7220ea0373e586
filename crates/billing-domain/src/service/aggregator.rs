//! Ledger totals and profit

use billing_types::{Summary, TripType};

use crate::model::TripRecord;

/// Parse an expense input, falling back to zero.
///
/// Unlike weight and rate, expense fields never block anything: text that
/// is not a number counts as no expense.
pub fn parse_expense(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Compute per-direction totals, grand total and profit
pub fn summarize(records: &[TripRecord], fuel_cost: f64, misc_cost: f64) -> Summary {
    let total_for = |trip_type: TripType| -> f64 {
        records
            .iter()
            .filter(|r| r.trip_type() == trip_type)
            .map(|r| r.total_cost())
            .sum()
    };

    let go_total = total_for(TripType::Go);
    let return_total = total_for(TripType::Return);
    let grand_total = go_total + return_total;

    Summary {
        go_total,
        return_total,
        grand_total,
        profit: grand_total - (fuel_cost + misc_cost),
    }
}
