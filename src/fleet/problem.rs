//! The fleet routing problem seen by backends.

use crate::evaluation::tour_cost;
use crate::matrix::CostMatrix;
use crate::models::DEPOT;

/// A validated fleet instance: matrix, vehicle count and cost cap.
///
/// Routes are handled as interiors (depot omitted). The objective a backend
/// minimizes is the sum of [`route_score`](Self::route_score) over routes.
///
/// # Examples
///
/// ```
/// use u_delivery::fleet::FleetProblem;
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_lookups(4, true, |_, _| Some(1.0)).unwrap();
/// let problem = FleetProblem::new(&m, 2, 3.0, 1.0);
/// // Three stops cost 4, one over the cap.
/// assert_eq!(problem.route_score(&[1, 2, 3]), 5.0);
/// assert_eq!(problem.objective(&[vec![1, 2], vec![3]]), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FleetProblem<'a> {
    matrix: &'a CostMatrix,
    vehicles: usize,
    cap: f64,
    overflow_weight: f64,
}

impl<'a> FleetProblem<'a> {
    pub fn new(matrix: &'a CostMatrix, vehicles: usize, cap: f64, overflow_weight: f64) -> Self {
        Self {
            matrix,
            vehicles,
            cap,
            overflow_weight,
        }
    }

    pub fn matrix(&self) -> &'a CostMatrix {
        self.matrix
    }

    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Transit cost of one route interior.
    pub fn route_cost(&self, interior: &[usize]) -> f64 {
        tour_cost(interior, DEPOT, self.matrix)
    }

    /// Scores a route cost: the cost itself plus the weighted excess over the cap.
    pub fn penalized(&self, cost: f64) -> f64 {
        cost + self.overflow_weight * (cost - self.cap).max(0.0)
    }

    pub fn route_score(&self, interior: &[usize]) -> f64 {
        self.penalized(self.route_cost(interior))
    }

    /// Backend objective over a set of route interiors.
    pub fn objective(&self, routes: &[Vec<usize>]) -> f64 {
        routes.iter().map(|r| self.route_score(r)).sum()
    }
}
