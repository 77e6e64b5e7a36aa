//! Stop relocation within and between routes.
//!
//! # Algorithm
//!
//! For each stop, try every insertion position in every route (its own
//! included) and apply the best move if it lowers the combined score of the
//! routes involved. Empty routes are valid targets, which is how an idle
//! vehicle picks up work.
//!
//! # Complexity
//!
//! O(n² × R) score evaluations per pass.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use std::time::Instant;

use super::{expired, EPSILON};

/// A relocate move: move a stop from one position to another.
#[derive(Debug, Clone, Copy)]
struct RelocateMove {
    to_route: usize,
    to_pos: usize,
    delta: f64,
}

/// Relocates stops while any move lowers the total score.
///
/// Returns `true` if any stop moved. Stops early, between stops, once
/// `deadline` has passed.
///
/// # Examples
///
/// ```
/// use u_delivery::evaluation::tour_cost;
/// use u_delivery::local_search::relocate_pass;
/// use u_delivery::matrix::CostMatrix;
///
/// // Stops 1 and 2 are close together, 3 is far away.
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 5.0, 9.0],
///     vec![5.0, 0.0, 1.0, 9.0],
///     vec![5.0, 1.0, 0.0, 9.0],
///     vec![9.0, 9.0, 9.0, 0.0],
/// ]).unwrap();
/// let mut routes = vec![vec![1, 3], vec![2]];
/// assert!(relocate_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
/// let total: f64 = routes.iter().map(|r| tour_cost(r, 0, &m)).sum();
/// assert!(total < 33.0);
/// ```
pub fn relocate_pass<F>(routes: &mut [Vec<usize>], score: &F, deadline: Option<Instant>) -> bool
where
    F: Fn(&[usize]) -> f64,
{
    let mut changed = false;
    for from in 0..routes.len() {
        let mut pos = 0;
        while pos < routes[from].len() {
            if expired(deadline) {
                return changed;
            }
            match find_best_relocate(routes, from, pos, score) {
                Some(mv) => {
                    let stop = routes[from].remove(pos);
                    routes[mv.to_route].insert(mv.to_pos, stop);
                    changed = true;
                }
                None => pos += 1,
            }
        }
    }
    changed
}

/// Finds the best improving destination for the stop at `routes[from][pos]`.
fn find_best_relocate<F>(
    routes: &[Vec<usize>],
    from: usize,
    pos: usize,
    score: &F,
) -> Option<RelocateMove>
where
    F: Fn(&[usize]) -> f64,
{
    let stop = routes[from][pos];
    let from_before = score(&routes[from]);
    let mut remaining = routes[from].clone();
    remaining.remove(pos);
    let from_after = score(&remaining);

    let mut best: Option<RelocateMove> = None;
    let mut consider = |to_route: usize, to_pos: usize, delta: f64| {
        if delta < -EPSILON && best.map_or(true, |b| delta < b.delta) {
            best = Some(RelocateMove {
                to_route,
                to_pos,
                delta,
            });
        }
    };

    for (to, target) in routes.iter().enumerate() {
        if to == from {
            for at in 0..=remaining.len() {
                if at == pos {
                    continue;
                }
                let candidate = inserted(&remaining, at, stop);
                consider(to, at, score(&candidate) - from_before);
            }
        } else {
            let to_before = score(target);
            for at in 0..=target.len() {
                let candidate = inserted(target, at, stop);
                let delta = (from_after + score(&candidate)) - (from_before + to_before);
                consider(to, at, delta);
            }
        }
    }

    best
}

fn inserted(route: &[usize], at: usize, stop: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(route.len() + 1);
    out.extend_from_slice(&route[..at]);
    out.push(stop);
    out.extend_from_slice(&route[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;
    use crate::matrix::CostMatrix;

    fn line(size: usize) -> CostMatrix {
        CostMatrix::from_lookups(size, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid")
    }

    #[test]
    fn test_within_route_reorders() {
        let m = line(4);
        let mut routes = vec![vec![3, 1, 2]];
        assert!(relocate_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
        assert_eq!(tour_cost(&routes[0], 0, &m), 6.0);
    }

    #[test]
    fn test_moves_into_cheaper_route() {
        let m = line(4);
        // Two out-and-back trips cost 10, one sweep along the line costs 6.
        let mut routes = vec![vec![1, 2], vec![3]];
        assert!(relocate_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
        let total: f64 = routes.iter().map(|r| tour_cost(r, 0, &m)).sum();
        assert_eq!(total, 6.0);
        assert_eq!(routes.iter().map(Vec::len).sum::<usize>(), 3);
    }

    #[test]
    fn test_idle_route_receives_stop_under_balancing_score() {
        let m = CostMatrix::from_lookups(4, true, |_, _| Some(1.0)).expect("valid");
        // Quadratic score favours spreading stops across both routes.
        let score = |r: &[usize]| tour_cost(r, 0, &m).powi(2);
        let mut routes = vec![vec![1, 2, 3], vec![]];
        assert!(relocate_pass(&mut routes, &score, None));
        assert!(!routes[1].is_empty());
    }

    #[test]
    fn test_no_improvement() {
        let m = line(4);
        let mut routes = vec![vec![1, 2, 3]];
        assert!(!relocate_pass(&mut routes, &|r: &[usize]| tour_cost(r, 0, &m), None));
    }

    #[test]
    fn test_expired_deadline_leaves_routes() {
        let m = line(4);
        let mut routes = vec![vec![1, 2], vec![3]];
        let score = |r: &[usize]| tour_cost(r, 0, &m);
        assert!(!relocate_pass(&mut routes, &score, Some(Instant::now())));
        assert_eq!(routes, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_inserted() {
        assert_eq!(inserted(&[1, 3], 1, 2), vec![1, 2, 3]);
        assert_eq!(inserted(&[1, 3], 2, 2), vec![1, 3, 2]);
        assert_eq!(inserted(&[], 0, 2), vec![2]);
    }
}
