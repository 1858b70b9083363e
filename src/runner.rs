//! Batch runner for evaluating many portfolios
//!
//! Each portfolio is independent, so batches are spread across threads.
//! Results come back in input order.

use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::investment::Investment;
use crate::portfolio::{InvestmentStatistics, PortfolioEngine};

/// Pre-configured runner sharing one valuation date across a batch
///
/// # Example
/// ```ignore
/// let runner = BatchRunner::new(EngineConfig::default());
/// let results = runner.run_batch(&[household_a, household_b]);
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    engine: PortfolioEngine,
}

impl BatchRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: PortfolioEngine::new(config),
        }
    }

    /// Statistics for a single portfolio
    pub fn run(&self, investments: &[Investment]) -> InvestmentStatistics {
        self.engine.statistics(investments)
    }

    /// Statistics for each portfolio, computed in parallel
    pub fn run_batch(&self, portfolios: &[Vec<Investment>]) -> Vec<InvestmentStatistics> {
        log::info!(
            "Evaluating {} portfolios as of {}",
            portfolios.len(),
            self.engine.as_of()
        );

        portfolios
            .par_iter()
            .map(|investments| self.engine.statistics(investments))
            .collect()
    }

    /// Engine used for every run
    pub fn engine(&self) -> &PortfolioEngine {
        &self.engine
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
