//! Tax deduction on gains and income

/// Deduct `tax_rate` percent from a positive amount. Losses and zero pass
/// through unchanged.
pub fn apply_tax(amount: f64, tax_rate: f64) -> f64 {
    if amount > 0.0 {
        amount * (1.0 - tax_rate / 100.0)
    } else {
        amount
    }
}
