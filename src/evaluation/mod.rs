//! Tour cost evaluation.
//!
//! Free functions work over any [`ArcCost`](crate::matrix::ArcCost) and skip
//! validation for use in search loops; [`TourEvaluator`] validates routes
//! against a [`CostMatrix`](crate::matrix::CostMatrix) first.

mod evaluator;

pub use evaluator::{outbound_cost, route_cost, tour_cost, TourEvaluator};
