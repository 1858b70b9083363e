//! Year-by-year projection series

use serde::{Deserialize, Serialize};

use super::growth::calculate_projected_value_with_composition;

/// Projected value at the end of a given year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: f64,
}

/// Lazy sequence of yearly projected values for years `1..=points`.
///
/// Each value is computed from the starting value, so the series holds
/// no running state beyond its position and can be restarted or cloned.
#[derive(Debug, Clone)]
pub struct ProjectionSeries {
    start_value: f64,
    yearly_rate_pct: f64,
    points: u32,
    next_year: u32,
}

impl ProjectionSeries {
    pub fn new(start_value: f64, yearly_rate_pct: f64, points: u32) -> Self {
        Self {
            start_value,
            yearly_rate_pct,
            points,
            next_year: 1,
        }
    }

    /// Rewind to the first year
    pub fn restart(&mut self) {
        self.next_year = 1;
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn yearly_rate_pct(&self) -> f64 {
        self.yearly_rate_pct
    }
}

impl Iterator for ProjectionSeries {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<ProjectionPoint> {
        if self.next_year > self.points {
            return None;
        }

        let year = self.next_year;
        self.next_year += 1;
        Some(ProjectionPoint {
            year,
            value: calculate_projected_value_with_composition(self.start_value, self.yearly_rate_pct, year as f64),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_year > self.points {
            0
        } else {
            (self.points - self.next_year + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionSeries {}

/// Projection of `current_value` for `points` consecutive years
pub fn generate_projection_data(current_value: f64, yearly_rate_pct: f64, points: u32) -> ProjectionSeries {
    ProjectionSeries::new(current_value, yearly_rate_pct, points)
}
