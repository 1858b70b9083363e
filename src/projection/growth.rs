//! Compounding a value forward at a yearly rate

use chrono::NaiveDate;

use crate::investment::Investment;
use crate::returns::calculate_expected_yearly_yield;

/// Grow `current_value` at `yearly_rate_pct` percent per year, compounded yearly.
/// Rates at or below -100% wipe the value out instead of oscillating.
pub fn calculate_projected_value_with_composition(current_value: f64, yearly_rate_pct: f64, years: f64) -> f64 {
    let growth = (1.0 + yearly_rate_pct / 100.0).max(0.0);
    current_value * growth.powf(years)
}

/// Value of the position after `years`, grown at its expected yearly yield
pub fn calculate_expected_future_value(investment: &Investment, years: f64, as_of: NaiveDate) -> f64 {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return 0.0;
    }

    let expected_yield = calculate_expected_yearly_yield(investment, as_of);
    calculate_projected_value_with_composition(inv.current_value(), expected_yield, years)
}
