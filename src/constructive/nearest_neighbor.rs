//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single giant tour greedily: starting from the depot, always
//! visit the nearest unvisited stop. Ties go to the lowest stop index.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for routing. While tour
//! quality is typically 15-25% above optimal, it provides a fast baseline.

use crate::matrix::CostMatrix;

/// Constructs a giant tour over every non-depot location.
///
/// The returned order omits the depot at both ends.
///
/// # Examples
///
/// ```
/// use u_delivery::constructive::nearest_neighbor_tour;
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_lookups(4, true, |i, j| Some((i as f64 - j as f64).abs())).unwrap();
/// assert_eq!(nearest_neighbor_tour(&m, 0), vec![1, 2, 3]);
/// ```
pub fn nearest_neighbor_tour(matrix: &CostMatrix, depot: usize) -> Vec<usize> {
    let mut unvisited: Vec<usize> = (0..matrix.size()).filter(|&i| i != depot).collect();
    let mut tour = Vec::with_capacity(unvisited.len());
    let mut current = depot;

    while let Some(next) = matrix.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        tour.push(next);
        current = next;
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nn_visits_all() {
        let m = CostMatrix::from_lookups(5, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid");
        let tour = nearest_neighbor_tour(&m, 0);
        assert_eq!(tour, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_nn_empty() {
        let m = CostMatrix::new(1);
        assert!(nearest_neighbor_tour(&m, 0).is_empty());
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let m = CostMatrix::from_rows(vec![
            vec![0.0, 10.0, 1.0],
            vec![10.0, 0.0, 9.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(nearest_neighbor_tour(&m, 0), vec![2, 1]);
    }

    #[test]
    fn test_nn_ties_take_lowest_index() {
        let m = CostMatrix::from_lookups(4, true, |_, _| Some(1.0)).expect("valid");
        assert_eq!(nearest_neighbor_tour(&m, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_nn_unknown_arcs_visited_last() {
        let m = CostMatrix::from_lookups(3, true, |i, j| {
            if (i, j) == (0, 1) {
                None
            } else {
                Some(2.0)
            }
        })
        .expect("valid");
        assert_eq!(nearest_neighbor_tour(&m, 0), vec![2, 1]);
    }
}
