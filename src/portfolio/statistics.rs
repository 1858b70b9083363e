//! Portfolio-level aggregation
//!
//! Weighting bases differ by metric and must stay that way:
//! - weighted CAGR, estimated yearly gain % and tax rate: raw invested value
//! - expected yield: after-tax current value (invested + after-tax gain)

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::individual::{calculate_individual_investment_returns, InvestmentReturns};
use crate::investment::{Investment, InvestmentType};
use crate::projection::{
    calculate_projected_value_with_composition, generate_projection_data, ProjectionPoint,
};
use crate::returns::{
    calculate_expected_yearly_yield, calculate_individual_roi, calculate_yearly_capital_gains,
    calculate_yearly_dividend_interest,
};

/// Default horizon for the projected portfolio value
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;

/// Running totals for one investment type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub value: f64,
    pub count: usize,
    pub gain_loss: f64,
    pub estimated_yearly_gain_loss: f64,
    pub invested_value: f64,
}

/// Portfolio statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentStatistics {
    pub investment_count: usize,

    /// Market value of all holdings
    pub total_value: f64,
    /// Invested value plus after-tax capital gains
    pub total_value_after_tax: f64,
    pub total_invested: f64,

    /// After-tax capital gains plus income
    pub total_gain_loss: f64,
    pub total_gain_loss_percentage: f64,
    pub total_dividends_interest: f64,

    // Run-rates
    pub yearly_dividend_interest: f64,
    pub yearly_capital_gains: f64,

    /// Invested-value-weighted annualized return, percent
    pub weighted_cagr: f64,
    /// After-tax-value-weighted expected yield, percent
    pub expected_yield: f64,

    pub estimated_yearly_gain_loss: f64,
    pub estimated_yearly_gain_loss_percentage: f64,

    /// After-tax value compounded at the blended yearly gain rate
    pub projected_value: f64,
    pub projection_years: u32,

    /// Invested-value-weighted tax rate, percent
    pub average_tax_rate: f64,

    pub type_breakdown: BTreeMap<InvestmentType, TypeBreakdown>,
}

impl InvestmentStatistics {
    /// Statistics of a portfolio with no holdings
    pub fn empty(projection_years: u32) -> Self {
        Self {
            projection_years,
            ..Default::default()
        }
    }
}

/// Accumulates `value * weight` and `weight`
#[derive(Debug, Default, Clone, Copy)]
struct WeightedSum {
    weighted: f64,
    weight: f64,
}

impl WeightedSum {
    fn add(&mut self, value: f64, weight: f64) {
        self.weighted += value * weight;
        self.weight += weight;
    }

    /// Weighted mean, 0 when nothing carried weight
    fn mean(&self) -> f64 {
        if self.weight > 0.0 {
            self.weighted / self.weight
        } else {
            0.0
        }
    }
}

/// Invested-value-weighted annualized return of the portfolio, as a decimal.
///
/// Investments whose return is rejected as an outlier do not contribute
/// to either the numerator or the weights.
pub fn calculate_yearly_roi(investments: &[Investment], as_of: NaiveDate) -> f64 {
    let mut roi = WeightedSum::default();
    for investment in investments {
        if let Some(rate) = calculate_individual_roi(investment, as_of) {
            roi.add(rate, investment.resolved().invested_value());
        }
    }
    roi.mean()
}

/// Aggregate a portfolio with the default ten-year projection horizon
pub fn calculate_investment_statistics(investments: &[Investment], as_of: NaiveDate) -> InvestmentStatistics {
    calculate_investment_statistics_with_horizon(investments, as_of, DEFAULT_PROJECTION_YEARS)
}

/// Aggregate a portfolio, projecting its value `projection_years` ahead
pub fn calculate_investment_statistics_with_horizon(
    investments: &[Investment],
    as_of: NaiveDate,
    projection_years: u32,
) -> InvestmentStatistics {
    if investments.is_empty() {
        return InvestmentStatistics::empty(projection_years);
    }

    let returns: Vec<InvestmentReturns> = investments
        .iter()
        .map(|investment| calculate_individual_investment_returns(investment, as_of))
        .collect();
    aggregate(investments, &returns, as_of, projection_years)
}

/// Fold per-investment results into portfolio statistics.
/// `returns[i]` must belong to `investments[i]`.
pub(crate) fn aggregate(
    investments: &[Investment],
    returns: &[InvestmentReturns],
    as_of: NaiveDate,
    projection_years: u32,
) -> InvestmentStatistics {
    warn_on_mixed_currencies(investments);

    let mut stats = InvestmentStatistics::empty(projection_years);
    stats.investment_count = investments.len();

    let mut expected_yield = WeightedSum::default();
    let mut estimate_pct = WeightedSum::default();
    let mut tax_rate = WeightedSum::default();

    for (investment, result) in investments.iter().zip(returns) {
        let resolved = investment.resolved();

        stats.total_value += result.current_value;
        stats.total_value_after_tax += result.after_tax_value();
        stats.total_invested += result.invested_value;
        stats.total_gain_loss += result.total_gain_loss;
        stats.total_dividends_interest += result.dividends_interest;
        stats.yearly_dividend_interest += calculate_yearly_dividend_interest(investment);
        stats.yearly_capital_gains += calculate_yearly_capital_gains(investment, as_of);
        stats.estimated_yearly_gain_loss += result.estimated_yearly_gain_loss;

        expected_yield.add(calculate_expected_yearly_yield(investment, as_of), result.after_tax_value());
        estimate_pct.add(result.estimated_yearly_gain_loss_percentage, result.invested_value);
        tax_rate.add(resolved.tax_rate, result.invested_value);

        let entry = stats.type_breakdown.entry(result.investment_type).or_default();
        entry.value += result.current_value;
        entry.count += 1;
        entry.gain_loss += result.total_gain_loss;
        entry.estimated_yearly_gain_loss += result.estimated_yearly_gain_loss;
        entry.invested_value += result.invested_value;
    }

    if stats.total_invested > 0.0 {
        stats.total_gain_loss_percentage = stats.total_gain_loss / stats.total_invested * 100.0;
    }

    stats.weighted_cagr = calculate_yearly_roi(investments, as_of) * 100.0;
    stats.expected_yield = expected_yield.mean();
    stats.estimated_yearly_gain_loss_percentage = estimate_pct.mean();
    stats.average_tax_rate = tax_rate.mean();
    stats.projected_value = calculate_projected_value_with_composition(
        stats.total_value_after_tax,
        stats.estimated_yearly_gain_loss_percentage,
        projection_years as f64,
    );

    stats
}

fn warn_on_mixed_currencies(investments: &[Investment]) {
    let currencies: BTreeSet<&str> = investments
        .iter()
        .map(|investment| investment.currency.as_str())
        .filter(|currency| !currency.is_empty())
        .collect();

    if currencies.len() > 1 {
        log::warn!(
            "Portfolio mixes currencies {:?}; values are summed without conversion",
            currencies
        );
    }
}

/// Projection of one holding at its expected yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub name: String,
    pub investment_type: InvestmentType,
    pub current_value: f64,
    pub expected_yield: f64,
    pub projected_value: f64,
}

/// Portfolio value projected year by year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProjection {
    pub current_value: f64,
    pub years: u32,
    /// Sum over holdings, each compounded at its own expected yield
    pub series: Vec<ProjectionPoint>,
    pub investments: Vec<InvestmentProjection>,
}

impl PortfolioProjection {
    /// Value at the end of the horizon
    pub fn final_value(&self) -> f64 {
        self.series.last().map(|point| point.value).unwrap_or(self.current_value)
    }
}

/// Project every holding `years` ahead at its expected yearly yield
pub fn get_investment_projections(investments: &[Investment], as_of: NaiveDate, years: u32) -> PortfolioProjection {
    let mut projection = PortfolioProjection {
        current_value: 0.0,
        years,
        series: (1..=years).map(|year| ProjectionPoint { year, value: 0.0 }).collect(),
        investments: Vec::with_capacity(investments.len()),
    };

    for investment in investments {
        let resolved = investment.resolved();
        let (current_value, expected_yield) = if resolved.is_unfunded() {
            (0.0, 0.0)
        } else {
            (resolved.current_value(), calculate_expected_yearly_yield(investment, as_of))
        };

        let mut projected_value = current_value;
        for (total, point) in projection
            .series
            .iter_mut()
            .zip(generate_projection_data(current_value, expected_yield, years))
        {
            total.value += point.value;
            projected_value = point.value;
        }

        projection.current_value += current_value;
        projection.investments.push(InvestmentProjection {
            name: investment.name.clone(),
            investment_type: investment.investment_type,
            current_value,
            expected_yield,
            projected_value,
        });
    }

    projection
}
