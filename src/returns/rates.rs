//! Annualized growth and yield estimates
//!
//! All rates here are decimals (0.05 = 5%) except
//! [`calculate_expected_yearly_yield`] and [`YearlyEstimate::percentage`],
//! which are percentages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    CAGR_CEILING, CAGR_FLOOR, CASH_BASELINE_RETURN, DEFAULT_EXPECTED_YIELD_PCT, MIN_ANNUALIZATION_YEARS,
    SHORT_HOLDING_DAYS, SIMPLE_RETURN_CAP, YIELD_CAP_PCT,
};
use crate::investment::{Investment, InvestmentType, DAYS_PER_YEAR};

/// Holdings younger than this (in years) tolerate a higher annualized return
const SHORT_HOLDING_YEARS: f64 = 0.25;

/// Largest plausible annualized return for short and regular holdings
const MAX_SHORT_HOLDING_RETURN: f64 = 5.0;
const MAX_HOLDING_RETURN: f64 = 2.0;

/// Estimated yearly gain for one investment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyEstimate {
    /// After-tax amount per year
    pub amount: f64,
    /// `amount` relative to the invested value, in percent
    pub percentage: f64,
}

/// Non-annualized price change, bounded to ±50%
fn simple_return(initial: f64, current: f64) -> f64 {
    ((current - initial) / initial).clamp(-SIMPLE_RETURN_CAP, SIMPLE_RETURN_CAP)
}

/// Constant yearly rate growing `initial` into `current` over `years`
fn compound_rate(initial: f64, current: f64, years: f64) -> f64 {
    (current / initial).max(0.0).powf(1.0 / years) - 1.0
}

/// Compound annual growth rate of the position since purchase, in [-0.95, 10.0]
pub fn calculate_cagr(investment: &Investment, as_of: NaiveDate) -> f64 {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return 0.0;
    }

    let initial = inv.invested_value();
    let current = inv.current_value();

    let cagr = if inv.days_held(as_of) < SHORT_HOLDING_DAYS {
        simple_return(initial, current)
    } else {
        let years = inv.years_held(as_of).max(MIN_ANNUALIZATION_YEARS);
        compound_rate(initial, current, years)
    };

    cagr.clamp(CAGR_FLOOR, CAGR_CEILING)
}

/// Yield to maturity of a zero-coupon bond, from the invested amount to the
/// face value (current quote) over the remaining term, bounded to ±50%.
///
/// `None` for anything that is not an unmatured zero-coupon bond.
pub fn zero_coupon_ytm(investment: &Investment, as_of: NaiveDate) -> Option<f64> {
    let inv = investment.resolved();
    if !inv.is_zero_coupon_bond() || inv.is_unfunded() {
        return None;
    }

    let years = inv.years_to_maturity(as_of).filter(|years| *years > 0.0)?;
    let ytm = compound_rate(inv.invested_value(), inv.current_value(), years);
    Some(ytm.clamp(-SIMPLE_RETURN_CAP, SIMPLE_RETURN_CAP))
}

/// Annualized return used for the portfolio's weighted CAGR.
///
/// Returns `None` when the annualized market return is implausible (more
/// than 500% for holdings under three months, 200% otherwise); callers
/// must leave such investments out of the weighting.
pub fn calculate_individual_roi(investment: &Investment, as_of: NaiveDate) -> Option<f64> {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return Some(0.0);
    }

    if let Some(ytm) = zero_coupon_ytm(investment, as_of) {
        return Some(ytm);
    }
    if let Some(rate) = inv.coupon_rate {
        return Some(rate / 100.0);
    }

    let initial = inv.invested_value();
    let current = inv.current_value();

    match inv.kind {
        InvestmentType::CheckingAccount | InvestmentType::SavingsAccount => {
            if current != initial {
                Some(calculate_cagr(investment, as_of))
            } else {
                Some(CASH_BASELINE_RETURN)
            }
        }
        InvestmentType::Stock
        | InvestmentType::Etf
        | InvestmentType::Bond
        | InvestmentType::Cryptocurrency
        | InvestmentType::MutualFund
        | InvestmentType::RealEstate
        | InvestmentType::Commodity
        | InvestmentType::Certificate
        | InvestmentType::Other => {
            let days = inv.days_held(as_of);
            if days <= 0 {
                return Some(simple_return(initial, current));
            }

            let years = days as f64 / DAYS_PER_YEAR;
            let annualized = compound_rate(initial, current, years);
            let limit = if years < SHORT_HOLDING_YEARS {
                MAX_SHORT_HOLDING_RETURN
            } else {
                MAX_HOLDING_RETURN
            };

            if annualized.abs() > limit {
                log::debug!(
                    "Excluding '{}' from weighted return: {:.1}% annualized over {:.2} years",
                    investment.name,
                    annualized * 100.0,
                    years
                );
                None
            } else {
                Some(annualized)
            }
        }
    }
}

/// Expected after-tax gain for the coming year: capital growth at the
/// historical CAGR plus interest and dividends on the invested amount.
/// Zero-coupon bonds use their yield to maturity instead.
pub fn calculate_estimated_yearly_gain_loss(investment: &Investment, as_of: NaiveDate) -> YearlyEstimate {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return YearlyEstimate::default();
    }

    let invested = inv.invested_value();
    let pre_tax = match zero_coupon_ytm(investment, as_of) {
        Some(ytm) => invested * ytm,
        None => {
            let capital = invested * calculate_cagr(investment, as_of);
            let income_rate = inv.coupon_rate.unwrap_or(0.0) + inv.dividend_yield.unwrap_or(0.0);
            capital + invested * income_rate / 100.0
        }
    };

    let amount = inv.after_tax(pre_tax);
    YearlyEstimate {
        amount,
        percentage: amount / invested * 100.0,
    }
}

/// Expected yearly yield in percent, used to compound projections.
///
/// Coupons, bond yields and dividends are after tax. The CAGR fallback for
/// equities and the flat default for other types are not taxed.
pub fn calculate_expected_yearly_yield(investment: &Investment, as_of: NaiveDate) -> f64 {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return 0.0;
    }

    if let Some(rate) = inv.coupon_rate {
        return inv.after_tax(rate);
    }

    match inv.kind {
        InvestmentType::Bond => match zero_coupon_ytm(investment, as_of) {
            Some(ytm) => inv.after_tax((ytm * 100.0).min(YIELD_CAP_PCT)),
            None => DEFAULT_EXPECTED_YIELD_PCT,
        },
        InvestmentType::Stock | InvestmentType::Etf => match inv.dividend_yield {
            Some(dividend_yield) => inv.after_tax(dividend_yield),
            None => (calculate_cagr(investment, as_of) * 100.0).clamp(-YIELD_CAP_PCT, YIELD_CAP_PCT),
        },
        InvestmentType::Cryptocurrency
        | InvestmentType::MutualFund
        | InvestmentType::RealEstate
        | InvestmentType::Commodity
        | InvestmentType::CheckingAccount
        | InvestmentType::SavingsAccount
        | InvestmentType::Certificate
        | InvestmentType::Other => DEFAULT_EXPECTED_YIELD_PCT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn as_of() -> NaiveDate {
        date(2025, 6, 1)
    }

    fn stock(purchased: NaiveDate, purchase_price: f64, current_price: f64) -> Investment {
        Investment::new("ACME", InvestmentType::Stock, 10.0, purchase_price, purchased)
            .with_current_price(current_price)
    }

    #[test]
    fn test_cagr_two_years() {
        let inv = stock(date(2023, 6, 1), 100.0, 121.0);
        let years = 731.0 / 365.25;
        assert_relative_eq!(calculate_cagr(&inv, as_of()), 1.21_f64.powf(1.0 / years) - 1.0, max_relative = 1e-12);
        assert_abs_diff_eq!(calculate_cagr(&inv, as_of()), 0.10, epsilon = 0.001);
    }

    #[test]
    fn test_cagr_same_day_uses_simple_return() {
        let doubled = stock(as_of(), 100.0, 200.0);
        assert_eq!(calculate_cagr(&doubled, as_of()), 0.5);

        let modest = stock(as_of(), 100.0, 110.0);
        assert_relative_eq!(calculate_cagr(&modest, as_of()), 0.1, max_relative = 1e-12);

        let crashed = stock(as_of(), 100.0, 10.0);
        assert_eq!(calculate_cagr(&crashed, as_of()), -0.5);
    }

    #[test]
    fn test_cagr_bounds() {
        // 30x in 40 days would compound to an absurd rate
        let rocket = stock(date(2025, 4, 22), 1.0, 30.0);
        assert_eq!(calculate_cagr(&rocket, as_of()), CAGR_CEILING);

        let wiped_out = stock(date(2024, 6, 1), 100.0, 0.0);
        assert_eq!(calculate_cagr(&wiped_out, as_of()), CAGR_FLOOR);

        for (purchased, current) in [(date(2010, 1, 1), 5000.0), (date(2025, 5, 1), 0.01), (date(2025, 5, 20), 900.0)] {
            let cagr = calculate_cagr(&stock(purchased, 100.0, current), as_of());
            assert!((CAGR_FLOOR..=CAGR_CEILING).contains(&cagr), "cagr {} out of bounds", cagr);
        }
    }

    #[test]
    fn test_cagr_unfunded() {
        let mut inv = stock(date(2020, 1, 1), 100.0, 150.0);
        inv.quantity = 0.0;
        assert_eq!(calculate_cagr(&inv, as_of()), 0.0);
    }

    #[test]
    fn test_zero_coupon_ytm() {
        let bond = Investment::new("Zero", InvestmentType::Bond, 1.0, 900.0, date(2024, 6, 1))
            .with_current_price(1000.0)
            .with_maturity_date(date(2026, 6, 1));

        let years = 365.0 / 365.25;
        let ytm = zero_coupon_ytm(&bond, as_of()).unwrap();
        assert_relative_eq!(ytm, (1000.0_f64 / 900.0).powf(1.0 / years) - 1.0, max_relative = 1e-12);

        // Matured bonds and coupon bonds have no zero-coupon yield
        assert_eq!(zero_coupon_ytm(&bond, date(2026, 7, 1)), None);
        let coupon = bond.clone().with_interest_rate(4.0);
        assert_eq!(zero_coupon_ytm(&coupon, as_of()), None);
    }

    #[test]
    fn test_zero_coupon_ytm_capped() {
        let bond = Investment::new("Deep discount", InvestmentType::Bond, 1.0, 200.0, date(2025, 1, 1))
            .with_current_price(1000.0)
            .with_maturity_date(date(2025, 12, 1));
        assert_eq!(zero_coupon_ytm(&bond, as_of()), Some(0.5));
    }

    #[test]
    fn test_roi_coupon_rate() {
        let bond = Investment::new("Treasury", InvestmentType::Bond, 1.0, 1000.0, date(2020, 1, 1))
            .with_current_price(1100.0)
            .with_interest_rate(4.5);
        assert_eq!(calculate_individual_roi(&bond, as_of()), Some(0.045));

        // The coupon wins on any type
        let cert = Investment::new("CD", InvestmentType::Certificate, 1.0, 1000.0, date(2024, 1, 1))
            .with_interest_rate(3.0);
        assert_eq!(calculate_individual_roi(&cert, as_of()), Some(0.03));
    }

    #[test]
    fn test_roi_cash_accounts() {
        let checking = Investment::new("Checking", InvestmentType::CheckingAccount, 1.0, 2500.0, date(2024, 1, 1));
        assert_eq!(calculate_individual_roi(&checking, as_of()), Some(CASH_BASELINE_RETURN));

        let grown = checking.clone().with_current_price(2600.0);
        assert_eq!(calculate_individual_roi(&grown, as_of()), Some(calculate_cagr(&grown, as_of())));

        let savings = Investment::new("Savings", InvestmentType::SavingsAccount, 1.0, 5000.0, date(2024, 1, 1))
            .with_interest_rate(2.0);
        assert_eq!(calculate_individual_roi(&savings, as_of()), Some(0.02));
    }

    #[test]
    fn test_roi_same_day() {
        let inv = stock(as_of(), 100.0, 300.0);
        assert_eq!(calculate_individual_roi(&inv, as_of()), Some(0.5));
    }

    #[test]
    fn test_roi_outlier_rejection() {
        // 1% in one day annualizes to ~3600%
        let spike = stock(date(2025, 5, 31), 100.0, 101.0);
        assert_eq!(calculate_individual_roi(&spike, as_of()), None);

        // Tripled in a year: 200% annualized is the limit for longer holdings
        let tripled = stock(date(2024, 6, 1), 100.0, 310.0);
        assert_eq!(calculate_individual_roi(&tripled, as_of()), None);

        let steady = stock(date(2022, 6, 1), 100.0, 133.1);
        let roi = calculate_individual_roi(&steady, as_of()).unwrap();
        assert_abs_diff_eq!(roi, 0.10, epsilon = 0.001);
    }

    #[test]
    fn test_roi_short_holding_allows_higher_return() {
        // 50 days, +30%: ~580% annualized is rejected, +25% (~410%) is kept
        let hot = stock(date(2025, 4, 12), 100.0, 130.0);
        assert_eq!(calculate_individual_roi(&hot, as_of()), None);

        let warm = stock(date(2025, 4, 12), 100.0, 125.0);
        let roi = calculate_individual_roi(&warm, as_of()).unwrap();
        assert!(roi > MAX_HOLDING_RETURN && roi < MAX_SHORT_HOLDING_RETURN);
    }

    #[test]
    fn test_estimated_yearly_gain_loss() {
        let inv = Investment::new("ACME", InvestmentType::Stock, 10.0, 100.0, date(2023, 6, 1))
            .with_current_price(121.0)
            .with_dividend_yield(2.0)
            .with_taxation(25.0);

        let cagr = calculate_cagr(&inv, as_of());
        let expected = (1000.0 * cagr + 1000.0 * 0.02) * 0.75;
        let estimate = calculate_estimated_yearly_gain_loss(&inv, as_of());
        assert_relative_eq!(estimate.amount, expected, max_relative = 1e-12);
        assert_relative_eq!(estimate.percentage, expected / 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_estimated_loss_untaxed() {
        let inv = stock(date(2023, 6, 1), 100.0, 81.0).with_taxation(40.0);
        let estimate = calculate_estimated_yearly_gain_loss(&inv, as_of());
        assert_relative_eq!(estimate.amount, 1000.0 * calculate_cagr(&inv, as_of()), max_relative = 1e-12);
        assert!(estimate.amount < 0.0);
    }

    #[test]
    fn test_estimated_zero_coupon_bond() {
        let bond = Investment::new("Zero", InvestmentType::Bond, 2.0, 900.0, date(2024, 6, 1))
            .with_current_price(1000.0)
            .with_maturity_date(date(2026, 6, 1))
            .with_taxation(10.0);

        let ytm = zero_coupon_ytm(&bond, as_of()).unwrap();
        let estimate = calculate_estimated_yearly_gain_loss(&bond, as_of());
        assert_relative_eq!(estimate.amount, 1800.0 * ytm * 0.9, max_relative = 1e-12);
        assert_relative_eq!(estimate.percentage, ytm * 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_expected_yield_by_type() {
        let bond = Investment::new("Treasury", InvestmentType::Bond, 1.0, 1000.0, date(2024, 1, 1))
            .with_interest_rate(4.0)
            .with_taxation(25.0);
        assert_relative_eq!(calculate_expected_yearly_yield(&bond, as_of()), 3.0, max_relative = 1e-12);

        let dividend = stock(date(2024, 1, 1), 100.0, 100.0)
            .with_dividend_yield(3.0)
            .with_taxation(50.0);
        assert_relative_eq!(calculate_expected_yearly_yield(&dividend, as_of()), 1.5, max_relative = 1e-12);

        let growth = stock(date(2023, 6, 1), 100.0, 121.0).with_taxation(50.0);
        let cagr = calculate_cagr(&growth, as_of());
        // Historical growth fallback is not taxed
        assert_relative_eq!(calculate_expected_yearly_yield(&growth, as_of()), cagr * 100.0, max_relative = 1e-12);

        let rocket = stock(date(2024, 6, 1), 100.0, 190.0);
        assert_eq!(calculate_expected_yearly_yield(&rocket, as_of()), YIELD_CAP_PCT);
    }

    #[test]
    fn test_expected_yield_default_is_untaxed() {
        // Flat 5% ignores taxation while every other branch applies it
        let gold = Investment::new("Gold", InvestmentType::Commodity, 1.0, 1800.0, date(2020, 1, 1))
            .with_current_price(2400.0)
            .with_taxation(26.0);
        assert_eq!(calculate_expected_yearly_yield(&gold, as_of()), DEFAULT_EXPECTED_YIELD_PCT);

        let plain_bond = Investment::new("Perpetual", InvestmentType::Bond, 1.0, 1000.0, date(2020, 1, 1))
            .with_taxation(26.0);
        assert_eq!(calculate_expected_yearly_yield(&plain_bond, as_of()), DEFAULT_EXPECTED_YIELD_PCT);
    }

    #[test]
    fn test_expected_yield_zero_coupon_bond() {
        let bond = Investment::new("Zero", InvestmentType::Bond, 1.0, 900.0, date(2024, 6, 1))
            .with_current_price(1000.0)
            .with_maturity_date(date(2026, 6, 1))
            .with_taxation(20.0);
        let ytm = zero_coupon_ytm(&bond, as_of()).unwrap();
        assert_relative_eq!(calculate_expected_yearly_yield(&bond, as_of()), ytm * 100.0 * 0.8, max_relative = 1e-12);
    }
}
