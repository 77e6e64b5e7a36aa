//! Inter-route exchange operator (2-opt*).
//!
//! # Algorithm
//!
//! The cross-exchange (2-opt*) operator swaps tail segments between two routes.
//! Given routes R1 = [a₁, ..., aᵢ, aᵢ₊₁, ..., aₙ] and
//! R2 = [b₁, ..., bⱼ, bⱼ₊₁, ..., bₘ], produce:
//!
//! R1' = [a₁, ..., aᵢ, bⱼ₊₁, ..., bₘ]
//! R2' = [b₁, ..., bⱼ, aᵢ₊₁, ..., aₙ]
//!
//! Cuts may fall before the first stop, so a tail can move onto an idle
//! route. Moves are accepted when the combined score of both routes drops.
//!
//! # Complexity
//!
//! O(n² × R²) score evaluations per pass, where n = stops per route,
//! R = number of routes.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1995). "An Exchange Heuristic for
//! Routeing Problems with Time Windows", *Journal of the Operational Research
//! Society* 46(12), 1433-1446.

use std::time::Instant;

use super::{expired, EPSILON};

/// Applies cross-exchange between every pair of routes until no swap helps.
///
/// Returns `true` if any tails were exchanged. Stops early once `deadline`
/// has passed; a partly searched pair is left unchanged.
///
/// # Examples
///
/// ```
/// use u_delivery::evaluation::tour_cost;
/// use u_delivery::local_search::exchange_pass;
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_lookups(5, true, |i, j| Some((i as f64 - j as f64).abs())).unwrap();
/// let mut routes = vec![vec![1, 4], vec![3, 2]];
/// let score = |r: &[usize]| tour_cost(r, 0, &m);
/// let before: f64 = routes.iter().map(|r| score(r)).sum();
/// exchange_pass(&mut routes, &score, None);
/// let after: f64 = routes.iter().map(|r| score(r)).sum();
/// assert!(after <= before);
/// ```
pub fn exchange_pass<F>(routes: &mut [Vec<usize>], score: &F, deadline: Option<Instant>) -> bool
where
    F: Fn(&[usize]) -> f64,
{
    if routes.len() < 2 {
        return false;
    }

    let mut changed = false;
    let mut improved = true;
    while improved {
        improved = false;

        for r1 in 0..routes.len() {
            for r2 in (r1 + 1)..routes.len() {
                if expired(deadline) {
                    return changed;
                }
                if routes[r1].is_empty() && routes[r2].is_empty() {
                    continue;
                }
                let found = find_best_exchange(&routes[r1], &routes[r2], score, deadline);
                if let Some((cut1, cut2)) = found {
                    let tail1: Vec<usize> = routes[r1][cut1..].to_vec();
                    let tail2: Vec<usize> = routes[r2][cut2..].to_vec();
                    routes[r1].truncate(cut1);
                    routes[r2].truncate(cut2);
                    routes[r1].extend(tail2);
                    routes[r2].extend(tail1);
                    improved = true;
                    changed = true;
                }
            }
        }
    }
    changed
}

/// Finds the best improving cross-exchange between two routes.
/// Returns `(cut_pos_r1, cut_pos_r2)`, or `None` if `deadline` passes first.
fn find_best_exchange<F>(
    route1: &[usize],
    route2: &[usize],
    score: &F,
    deadline: Option<Instant>,
) -> Option<(usize, usize)>
where
    F: Fn(&[usize]) -> f64,
{
    let before = score(route1) + score(route2);
    let mut best: Option<(usize, usize, f64)> = None;
    let mut new1 = Vec::with_capacity(route1.len() + route2.len());
    let mut new2 = Vec::with_capacity(route1.len() + route2.len());

    for cut1 in 0..=route1.len() {
        if expired(deadline) {
            return None;
        }
        for cut2 in 0..=route2.len() {
            new1.clear();
            new1.extend_from_slice(&route1[..cut1]);
            new1.extend_from_slice(&route2[cut2..]);
            new2.clear();
            new2.extend_from_slice(&route2[..cut2]);
            new2.extend_from_slice(&route1[cut1..]);

            let delta = score(&new1) + score(&new2) - before;
            if delta < -EPSILON && best.map_or(true, |b| delta < b.2) {
                best = Some((cut1, cut2, delta));
            }
        }
    }

    best.map(|(cut1, cut2, _)| (cut1, cut2))
}
