//! Investment Engine - return, yield and projection calculations for personal portfolios
//!
//! This library provides:
//! - Market value, after-tax gain and income accrual per holding
//! - Annualized returns (CAGR, zero-coupon yield to maturity, per-type ROI)
//! - Forward projections at expected yearly yields
//! - Portfolio aggregation with weighted averages and a per-type breakdown
//!
//! Every calculation takes the valuation date explicitly; nothing reads the
//! clock except [`EngineConfig::as_of`] when no date is configured.

pub mod config;
pub mod error;
pub mod investment;
pub mod portfolio;
pub mod projection;
pub mod returns;
pub mod runner;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::EngineError;
pub use investment::{Investment, InvestmentType, ResolvedInvestment};
pub use portfolio::{
    calculate_individual_investment_returns, calculate_investment_statistics, calculate_yearly_roi,
    get_investment_projections, InvestmentReturns, InvestmentStatistics, PortfolioEngine, PortfolioProjection,
    TypeBreakdown,
};
pub use projection::{generate_projection_data, ProjectionPoint, ProjectionSeries};
pub use runner::BatchRunner;
