//! Tour chromosome for the genetic search.
//!
//! A tour is a permutation of every non-depot stop. The depot anchors are
//! implicit and added only when the tour is turned into a
//! [`Route`](crate::models::Route).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::tour_cost;
use crate::matrix::ArcCost;
use crate::models::{Route, DEPOT};

/// A permutation of stops `1..n`.
///
/// Fitness is not stored: crossover and mutation change the permutation,
/// so cost is always recomputed with [`Tour::cost`].
///
/// # Examples
///
/// ```
/// use u_delivery::ga::Tour;
///
/// let tour = Tour::new(vec![3, 1, 2]);
/// assert_eq!(tour.stops(), &[3, 1, 2]);
/// assert_eq!(tour.into_route().stops(), &[0, 3, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a stop permutation.
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Uniformly random permutation of stops `1..size`.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut stops: Vec<usize> = (1..size).collect();
        stops.shuffle(rng);
        Self { stops }
    }

    /// Returns the stop permutation.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Returns a mutable reference to the stop permutation.
    pub fn stops_mut(&mut self) -> &mut Vec<usize> {
        &mut self.stops
    }

    /// Number of stops in this tour.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Depot-anchored tour cost.
    pub fn cost<C: ArcCost + ?Sized>(&self, costs: &C) -> f64 {
        tour_cost(&self.stops, DEPOT, costs)
    }

    /// Anchors the tour at the depot.
    pub fn into_route(self) -> Route {
        Route::from_interior(self.stops)
    }
}
