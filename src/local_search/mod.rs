//! Local search moves over route interiors.
//!
//! - [`two_opt_pass`] — Intra-route 2-opt segment reversal
//! - [`relocate_pass`] — Stop relocation within and between routes
//! - [`exchange_pass`] — Inter-route tail exchange (2-opt*)
//!
//! Every pass takes the routes as plain interiors (depot omitted) and a
//! per-route score. Lower scores are better; a move is applied only when it
//! lowers the combined score of the routes it touches.
//!
//! Passes also take an optional deadline. Once it has passed, a pass stops
//! between moves and leaves the routes as they are, so a caller with a
//! wall-clock budget keeps every improvement made so far.

use std::time::Instant;

mod exchange;
mod relocate;
mod two_opt;

pub use exchange::exchange_pass;
pub use relocate::relocate_pass;
pub use two_opt::two_opt_pass;

/// Minimum score drop for a move to count as an improvement.
pub(crate) const EPSILON: f64 = 1e-10;

/// Whether `deadline` has passed. `None` never expires.
pub(crate) fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|at| Instant::now() >= at)
}
