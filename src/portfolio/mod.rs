//! Per-investment and portfolio aggregation

mod engine;
mod individual;
mod statistics;

pub use engine::PortfolioEngine;
pub use individual::{calculate_individual_investment_returns, InvestmentReturns};
pub use statistics::{
    calculate_investment_statistics, calculate_investment_statistics_with_horizon, calculate_yearly_roi,
    get_investment_projections, InvestmentProjection, InvestmentStatistics, PortfolioProjection, TypeBreakdown,
    DEFAULT_PROJECTION_YEARS,
};
