//! Forward projections at an expected yearly rate

mod growth;
mod series;

pub use growth::{calculate_expected_future_value, calculate_projected_value_with_composition};
pub use series::{generate_projection_data, ProjectionPoint, ProjectionSeries};
