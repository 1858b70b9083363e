//! Income accrual and annualized capital gains
//!
//! Bond coupons accrue on the invested amount (fixed basis). Equity
//! dividends accrue on current market value, so they scale with price.
//! Both accrue linearly over the holding period; nothing compounds.

use chrono::NaiveDate;

use super::MIN_ANNUALIZATION_YEARS;
use crate::investment::{Investment, InvestmentType, ResolvedInvestment};

/// Pre-tax income per year at today's rates
fn annual_income(inv: &ResolvedInvestment) -> f64 {
    match inv.kind {
        InvestmentType::Bond => inv
            .coupon_rate
            .map(|rate| inv.invested_value() * rate / 100.0)
            .unwrap_or(0.0),
        InvestmentType::Stock | InvestmentType::Etf => inv
            .dividend_yield
            .map(|y| inv.current_value() * y / 100.0)
            .unwrap_or(0.0),
        InvestmentType::Cryptocurrency
        | InvestmentType::MutualFund
        | InvestmentType::RealEstate
        | InvestmentType::Commodity
        | InvestmentType::CheckingAccount
        | InvestmentType::SavingsAccount
        | InvestmentType::Certificate
        | InvestmentType::Other => 0.0,
    }
}

/// Dividends and interest earned since purchase, after tax
pub fn calculate_dividends_interest_earned(investment: &Investment, as_of: NaiveDate) -> f64 {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return 0.0;
    }

    let years = inv.years_held(as_of);
    inv.after_tax(annual_income(&inv) * years)
}

/// Current yearly dividend and interest run-rate, after tax
pub fn calculate_yearly_dividend_interest(investment: &Investment) -> f64 {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return 0.0;
    }

    inv.after_tax(annual_income(&inv))
}

/// Average capital gain per year of holding, after tax.
///
/// Losses are not annualized: a non-positive result returns the whole
/// signed loss. Zero-coupon bonds only count the part of the gain already
/// accreted, interpolated linearly across the bond's term.
pub fn calculate_yearly_capital_gains(investment: &Investment, as_of: NaiveDate) -> f64 {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return 0.0;
    }

    let years = inv.years_held(as_of);
    let total_gain = inv.current_value() - inv.invested_value();

    if inv.is_zero_coupon_bond() {
        if let Some(term) = inv.bond_term_years().filter(|term| *term > 0.0) {
            // Linear accretion: yearly gain is total_gain / term at any holding age
            let realized = total_gain * years / term;
            let annualized = if years > 0.0 { realized / years } else { realized };
            let gain = if annualized < 0.0 { realized } else { annualized };
            return inv.after_tax(gain);
        }
    }

    let annualized = total_gain / years.max(MIN_ANNUALIZATION_YEARS);
    if annualized > 0.0 {
        inv.after_tax(annualized)
    } else {
        inv.after_tax(total_gain)
    }
}
