//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor giant tour, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_tour;
