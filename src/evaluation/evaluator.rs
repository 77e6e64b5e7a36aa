//! Tour cost evaluation.

use crate::error::RoutingError;
use crate::matrix::{ArcCost, CostMatrix};
use crate::models::{Route, DEPOT};

/// Sums consecutive legs of a full stop sequence.
///
/// The sequence is taken as given: depot anchors must already be present.
pub fn route_cost<C: ArcCost + ?Sized>(stops: &[usize], costs: &C) -> f64 {
    stops.windows(2).map(|leg| costs.arc(leg[0], leg[1])).sum()
}

/// Cost of `depot → interior[0] → ... → interior[n-1] → depot`.
///
/// An empty interior costs zero.
pub fn tour_cost<C: ArcCost + ?Sized>(interior: &[usize], depot: usize, costs: &C) -> f64 {
    match (interior.first(), interior.last()) {
        (Some(&first), Some(&last)) => {
            costs.arc(depot, first) + route_cost(interior, costs) + costs.arc(last, depot)
        }
        _ => 0.0,
    }
}

/// Cost from the depot through the last stop, without the return leg.
pub fn outbound_cost<C: ArcCost + ?Sized>(interior: &[usize], depot: usize, costs: &C) -> f64 {
    match interior.first() {
        Some(&first) => costs.arc(depot, first) + route_cost(interior, costs),
        None => 0.0,
    }
}

/// Evaluates routes against a cost matrix, validating them first.
///
/// # Examples
///
/// ```
/// use u_delivery::matrix::CostMatrix;
/// use u_delivery::evaluation::TourEvaluator;
/// use u_delivery::models::Route;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 3.0],
///     vec![8.0, 3.0, 0.0],
/// ]).unwrap();
/// let evaluator = TourEvaluator::new(&m);
/// let cost = evaluator.cost(&Route::from_interior(vec![1, 2])).unwrap();
/// assert_eq!(cost, 16.0); // 5 + 3 + 8
/// ```
pub struct TourEvaluator<'a> {
    matrix: &'a CostMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(matrix: &'a CostMatrix) -> Self {
        Self { matrix }
    }

    /// Total cost of a route, including both depot legs.
    ///
    /// Fails if the route references an index outside the matrix or visits
    /// a stop twice.
    pub fn cost(&self, route: &Route) -> Result<f64, RoutingError> {
        self.check(route.interior())?;
        Ok(route_cost(route.stops(), self.matrix))
    }

    /// Total cost of a bare permutation, anchored at the depot.
    pub fn permutation_cost(&self, interior: &[usize]) -> Result<f64, RoutingError> {
        self.check(interior)?;
        Ok(tour_cost(interior, DEPOT, self.matrix))
    }

    fn check(&self, interior: &[usize]) -> Result<(), RoutingError> {
        let size = self.matrix.size();
        let mut seen = vec![false; size];
        for &stop in interior {
            if stop >= size {
                return Err(RoutingError::StopOutOfRange { stop, size });
            }
            if stop == DEPOT || seen[stop] {
                return Err(RoutingError::RepeatedStop(stop));
            }
            seen[stop] = true;
        }
        Ok(())
    }
}
