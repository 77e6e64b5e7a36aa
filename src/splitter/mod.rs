//! Route splitting under a per-vehicle cost cap.

mod greedy;

pub use greedy::split_route;
