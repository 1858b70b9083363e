//! Per-investment return summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::investment::{Investment, InvestmentType};
use crate::returns::{calculate_dividends_interest_earned, calculate_estimated_yearly_gain_loss};

/// Everything the app shows for a single holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturns {
    pub name: String,
    pub investment_type: InvestmentType,

    // Values
    pub current_value: f64,
    pub invested_value: f64,

    // Capital gain (after tax unless marked gross)
    pub gross_gain_loss: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,

    // Income
    pub dividends_interest: f64,

    // Capital gain plus income
    pub total_gain_loss: f64,
    pub total_gain_loss_percentage: f64,

    // Forward estimate
    pub estimated_yearly_gain_loss: f64,
    pub estimated_yearly_gain_loss_percentage: f64,

    /// Days until a bond matures
    pub days_to_maturity: Option<i64>,
}

impl InvestmentReturns {
    /// All-zero result for positions without a cost basis
    pub fn zero(investment: &Investment) -> Self {
        Self {
            name: investment.name.clone(),
            investment_type: investment.investment_type,
            current_value: 0.0,
            invested_value: 0.0,
            gross_gain_loss: 0.0,
            gain_loss: 0.0,
            gain_loss_percentage: 0.0,
            dividends_interest: 0.0,
            total_gain_loss: 0.0,
            total_gain_loss_percentage: 0.0,
            estimated_yearly_gain_loss: 0.0,
            estimated_yearly_gain_loss_percentage: 0.0,
            days_to_maturity: None,
        }
    }

    /// Invested amount plus after-tax capital gain
    pub fn after_tax_value(&self) -> f64 {
        self.invested_value + self.gain_loss
    }
}

/// Combine value, gain, income and the yearly estimate for one investment
pub fn calculate_individual_investment_returns(investment: &Investment, as_of: NaiveDate) -> InvestmentReturns {
    let inv = investment.resolved();
    if inv.is_unfunded() {
        return InvestmentReturns::zero(investment);
    }

    let invested_value = inv.invested_value();
    let current_value = inv.current_value();
    let gross_gain_loss = current_value - invested_value;
    let gain_loss = inv.after_tax(gross_gain_loss);
    let dividends_interest = calculate_dividends_interest_earned(investment, as_of);
    let total_gain_loss = gain_loss + dividends_interest;
    let estimate = calculate_estimated_yearly_gain_loss(investment, as_of);

    InvestmentReturns {
        name: investment.name.clone(),
        investment_type: inv.kind,
        current_value,
        invested_value,
        gross_gain_loss,
        gain_loss,
        gain_loss_percentage: gain_loss / invested_value * 100.0,
        dividends_interest,
        total_gain_loss,
        total_gain_loss_percentage: total_gain_loss / invested_value * 100.0,
        estimated_yearly_gain_loss: estimate.amount,
        estimated_yearly_gain_loss_percentage: estimate.percentage,
        days_to_maturity: inv.days_to_maturity(as_of),
    }
}
