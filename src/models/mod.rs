//! Domain model types for delivery routing.
//!
//! Stops carry a matrix index and a label, routes are depot-anchored stop
//! sequences, and a plan is the final set of routes with their costs.

mod plan;
mod route;
mod stop;

pub use plan::{FleetOutcome, RoutePlan};
pub use route::{Route, DEPOT};
pub use stop::Stop;
