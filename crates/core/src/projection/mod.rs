//! Projection module - compound growth of weekly savings.

mod projection_calculator;
mod projection_model;

pub use projection_calculator::project_future_value;
pub use projection_model::{ProjectionInput, ProjectionPoint, ProjectionResult};
