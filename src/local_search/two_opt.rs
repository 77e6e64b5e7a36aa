//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) in a route, reverse the segment
//! `[i..=j]` and keep the reversal if the route score drops. Repeats until a
//! full pass finds nothing (first-improvement strategy).
//!
//! The score is supplied by the caller so the same move serves plain
//! transit cost and the penalized objective of guided local search.
//! Reversal matters even on symmetric matrices once arc penalties apply.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::time::Instant;

use super::{expired, EPSILON};

/// Applies 2-opt to every route until no reversal improves its score.
///
/// Returns `true` if any route changed. Stops early, between reversal
/// starts, once `deadline` has passed.
///
/// # Examples
///
/// ```
/// use u_delivery::evaluation::tour_cost;
/// use u_delivery::local_search::two_opt_pass;
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_lookups(4, true, |i, j| Some((i as f64 - j as f64).abs())).unwrap();
/// let mut routes = vec![vec![2, 1, 3]];
/// assert!(two_opt_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
/// assert_eq!(tour_cost(&routes[0], 0, &m), 6.0);
/// ```
pub fn two_opt_pass<F>(routes: &mut [Vec<usize>], score: &F, deadline: Option<Instant>) -> bool
where
    F: Fn(&[usize]) -> f64,
{
    let mut changed = false;
    for route in routes.iter_mut() {
        changed |= improve_route(route, score, deadline);
    }
    changed
}

fn improve_route<F>(route: &mut Vec<usize>, score: &F, deadline: Option<Instant>) -> bool
where
    F: Fn(&[usize]) -> f64,
{
    let n = route.len();
    if n < 2 {
        return false;
    }

    let mut changed = false;
    let mut improved = true;
    let mut current = score(route);
    let mut candidate = route.clone();

    while improved {
        improved = false;
        for i in 0..n - 1 {
            if expired(deadline) {
                return changed;
            }
            for j in i + 1..n {
                candidate.copy_from_slice(route);
                candidate[i..=j].reverse();
                let value = score(&candidate);
                if value < current - EPSILON {
                    route.copy_from_slice(&candidate);
                    current = value;
                    improved = true;
                    changed = true;
                }
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;
    use crate::matrix::CostMatrix;

    fn square() -> CostMatrix {
        // Depot in the centre of a 10x10 square, stops at the corners.
        let points = [(5.0, 5.0), (0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)];
        CostMatrix::from_lookups(5, true, |i, j| {
            let (a, b): ((f64, f64), (f64, f64)) = (points[i], points[j]);
            Some(((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
        })
        .expect("valid")
    }

    #[test]
    fn test_already_optimal_unchanged() {
        let m = CostMatrix::from_lookups(4, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid");
        let mut routes = vec![vec![1, 2, 3]];
        assert!(!two_opt_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
        assert_eq!(routes[0], vec![1, 2, 3]);
    }

    #[test]
    fn test_removes_crossing() {
        let m = square();
        let initial = vec![1, 4, 2, 3];
        let before = tour_cost(&initial, 0, &m);
        let mut routes = vec![initial];
        assert!(two_opt_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
        assert!(tour_cost(&routes[0], 0, &m) < before);
        let mut sorted = routes[0].clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_short_routes_untouched() {
        let m = square();
        let mut routes = vec![vec![], vec![2]];
        assert!(!two_opt_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
        assert_eq!(routes, vec![vec![], vec![2]]);
    }

    #[test]
    fn test_expired_deadline_leaves_routes() {
        let m = square();
        let mut routes = vec![vec![1, 4, 2, 3]];
        let score = |r: &[usize]| tour_cost(r, 0, &m);
        assert!(!two_opt_pass(&mut routes, &score, Some(Instant::now())));
        assert_eq!(routes, vec![vec![1, 4, 2, 3]]);
    }
}
