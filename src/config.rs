//! Engine configuration

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::portfolio::DEFAULT_PROJECTION_YEARS;

/// Longest supported projection horizon, in years
pub const MAX_PROJECTION_YEARS: u32 = 200;

/// Configuration for a statistics run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Valuation date (None = today)
    pub as_of: Option<NaiveDate>,

    /// Horizon in years for the projected portfolio value
    pub projection_years: u32,

    /// Number of yearly points in projection series
    pub projection_points: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            as_of: None,
            projection_years: DEFAULT_PROJECTION_YEARS,
            projection_points: DEFAULT_PROJECTION_YEARS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject horizons beyond [`MAX_PROJECTION_YEARS`]
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, years) in [
            ("projection_years", self.projection_years),
            ("projection_points", self.projection_points),
        ] {
            if years > MAX_PROJECTION_YEARS {
                return Err(EngineError::InvalidConfig(format!(
                    "{} is {}, at most {} is supported",
                    field, years, MAX_PROJECTION_YEARS
                )));
            }
        }
        Ok(())
    }

    /// Fix the valuation date
    pub fn at_date(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Valuation date, reading the local clock when none is configured
    pub fn as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
