//! Multi-vehicle fleet solving.
//!
//! - [`FleetProblem`] — Matrix, vehicle count, cap and the backend objective
//! - [`partition_tour`] — Bounded Prins split of a giant tour into ≤ V routes
//! - [`FleetBackend`] — Search seam: [`GlsBackend`] (default) and [`GeneticBackend`]
//! - [`FleetSolver`] — Validation, backend run, coverage check, cap correction

mod backend;
mod gls;
mod partition;
mod problem;
mod solver;

pub use backend::{FleetBackend, GeneticBackend, GlsBackend};
pub use partition::partition_tour;
pub use problem::FleetProblem;
pub use solver::FleetSolver;
