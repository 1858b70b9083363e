//! Portfolio engine bound to a valuation date and horizon

use chrono::NaiveDate;

use super::individual::{calculate_individual_investment_returns, InvestmentReturns};
use super::statistics::{aggregate, get_investment_projections, InvestmentStatistics, PortfolioProjection};
use crate::config::EngineConfig;
use crate::investment::Investment;

/// Evaluates portfolios against one fixed valuation date
#[derive(Debug, Clone)]
pub struct PortfolioEngine {
    config: EngineConfig,
    as_of: NaiveDate,
}

impl PortfolioEngine {
    /// Create an engine; the valuation date is resolved once here
    pub fn new(config: EngineConfig) -> Self {
        let as_of = config.as_of();
        Self { config, as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Per-investment results, in input order
    pub fn individual_returns(&self, investments: &[Investment]) -> Vec<InvestmentReturns> {
        investments
            .iter()
            .map(|investment| calculate_individual_investment_returns(investment, self.as_of))
            .collect()
    }

    /// Portfolio statistics over the configured horizon
    pub fn statistics(&self, investments: &[Investment]) -> InvestmentStatistics {
        super::calculate_investment_statistics_with_horizon(investments, self.as_of, self.config.projection_years)
    }

    /// Statistics together with the per-investment results they were built from
    pub fn evaluate(&self, investments: &[Investment]) -> (Vec<InvestmentReturns>, InvestmentStatistics) {
        if investments.is_empty() {
            return (Vec::new(), InvestmentStatistics::empty(self.config.projection_years));
        }
        let returns = self.individual_returns(investments);
        let stats = aggregate(investments, &returns, self.as_of, self.config.projection_years);
        (returns, stats)
    }

    /// Year-by-year projection over the configured number of points
    pub fn projections(&self, investments: &[Investment]) -> PortfolioProjection {
        get_investment_projections(investments, self.as_of, self.config.projection_points)
    }
}

impl Default for PortfolioEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::InvestmentType;

    fn engine() -> PortfolioEngine {
        PortfolioEngine::new(EngineConfig {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 1),
            projection_years: 5,
            projection_points: 3,
        })
    }

    fn investments() -> Vec<Investment> {
        vec![
            Investment::new("ACME", InvestmentType::Stock, 10.0, 100.0, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap())
                .with_current_price(150.0),
            Investment::new("CD", InvestmentType::Certificate, 1.0, 2000.0, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
                .with_interest_rate(3.5),
        ]
    }

    #[test]
    fn test_engine_uses_config() {
        let engine = engine();
        let stats = engine.statistics(&investments());
        assert_eq!(stats.projection_years, engine.config().projection_years);
        assert_eq!(stats.projection_years, 5);
        assert_eq!(engine.projections(&investments()).series.len(), 3);
        assert_eq!(engine.as_of(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_evaluate_matches_statistics() {
        let engine = engine();
        let (returns, stats) = engine.evaluate(&investments());
        assert_eq!(returns.len(), 2);
        assert_eq!(stats, engine.statistics(&investments()));
        assert_eq!(returns[0].gain_loss, 500.0);
    }

    #[test]
    fn test_evaluate_empty() {
        let (returns, stats) = engine().evaluate(&[]);
        assert!(returns.is_empty());
        assert_eq!(stats.total_value, 0.0);
        assert!(stats.type_breakdown.is_empty());
    }
}
