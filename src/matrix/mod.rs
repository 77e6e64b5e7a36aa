//! Cost matrices and the matrix builder boundary.
//!
//! - [`CostMatrix`] — Dense n×n travel costs (index 0 = depot)
//! - [`ArcCost`] — Cost lookup seam shared by evaluators and local search
//! - [`CostUnit`] — Distance/duration unit and cap conversion
//! - [`MatrixProvider`] — External collaborator that builds the matrix

mod cost_matrix;
mod provider;
mod unit;

pub use cost_matrix::{ArcCost, CostMatrix};
pub use provider::{ApiKey, MatrixProvider, StaticMatrixProvider};
pub use unit::CostUnit;
