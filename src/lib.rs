//! # u-delivery
//!
//! Multi-vehicle delivery route optimization from a single depot.
//!
//! Given a cost matrix over the depot (index 0) and the delivery stops, the
//! crate assigns stops to a small fleet, orders each vehicle's visits to
//! minimize travel cost (distance or time), and keeps each route under a
//! per-vehicle cost cap by splitting over-long routes into extra depot trips.
//!
//! ## Modules
//!
//! - [`matrix`] — Cost matrix, cost units and the matrix provider boundary
//! - [`models`] — Domain model types (Stop, Route, RoutePlan, FleetOutcome)
//! - [`evaluation`] — Tour cost evaluation
//! - [`ga`] — Genetic search for a single tour
//! - [`constructive`] — Nearest-neighbor giant tour
//! - [`local_search`] — Local search moves (2-opt, relocate, exchange)
//! - [`fleet`] — Fleet solver with guided local search and genetic backends
//! - [`splitter`] — Cap-driven route splitting
//! - [`planner`] — Caller-facing optimize operation
//! - [`report`] — Plain-text route report
//! - [`config`] — Engine configuration
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod fleet;
pub mod ga;
pub mod local_search;
pub mod matrix;
pub mod models;
pub mod planner;
pub mod report;
pub mod splitter;
