//! Return, income and yield primitives for a single investment
//!
//! Every function here is total: degenerate inputs (no cost basis, zero
//! holding period) produce 0 instead of an error. The only exception is
//! [`calculate_individual_roi`], which returns `None` for implausible
//! annualized returns so aggregates can leave them out.

mod accrual;
mod rates;
mod tax;
mod value;

pub use accrual::{
    calculate_dividends_interest_earned, calculate_yearly_capital_gains,
    calculate_yearly_dividend_interest,
};
pub use rates::{
    calculate_cagr, calculate_estimated_yearly_gain_loss, calculate_expected_yearly_yield,
    calculate_individual_roi, zero_coupon_ytm, YearlyEstimate,
};
pub use tax::apply_tax;
pub use value::{calculate_current_value, calculate_invested_value};

/// Shortest holding period, in years, used when annualizing
pub const MIN_ANNUALIZATION_YEARS: f64 = 0.1;

/// Holdings younger than this use a simple return instead of compounding
pub const SHORT_HOLDING_DAYS: i64 = 30;

/// Bound on simple (non-annualized) returns and bond yields, as a decimal
pub const SIMPLE_RETURN_CAP: f64 = 0.5;

/// CAGR is clamped to [-95%, 1000%]
pub const CAGR_FLOOR: f64 = -0.95;
pub const CAGR_CEILING: f64 = 10.0;

/// Nominal return assumed for deposit accounts without a rate
pub const CASH_BASELINE_RETURN: f64 = 0.0001;

/// Expected yield (percent) for types without a better estimate
pub const DEFAULT_EXPECTED_YIELD_PCT: f64 = 5.0;

/// Cap on expected yields derived from prices, in percent
pub const YIELD_CAP_PCT: f64 = 50.0;
