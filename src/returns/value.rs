//! Market value of a position

use crate::investment::Investment;

/// Quantity times current price, or purchase price when no quote exists
pub fn calculate_current_value(investment: &Investment) -> f64 {
    investment.resolved().current_value()
}

/// Quantity times purchase price
pub fn calculate_invested_value(investment: &Investment) -> f64 {
    investment.resolved().invested_value()
}
