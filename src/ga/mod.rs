//! Genetic search for single-vehicle tours.
//!
//! - [`Tour`] — Permutation chromosome over all non-depot stops
//! - [`tournament`], [`single_cut_crossover`], [`swap_mutation`] — Operators
//! - [`GeneticSearch`] — Generational runner with a fixed generation count

mod chromosome;
mod operators;
mod search;

pub use chromosome::Tour;
pub use operators::{crossover_at, single_cut_crossover, swap_mutation, tournament};
pub use search::{GaResult, GeneticSearch};
