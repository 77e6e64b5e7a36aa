//! Guided local search over fleet routes.
//!
//! Guided local search augments the objective with adaptive arc penalties so
//! the descent can leave local minima. Features are the arcs a solution
//! travels (depot legs included). At each local minimum the arcs of maximum
//! utility `cost(a, b) / (1 + penalty(a, b))` get their penalty raised by
//! one, and the descent restarts on
//! `augmented = objective + lambda * sum(penalty over arcs used)`.
//!
//! `lambda` is fixed after the first descent as
//! `penalty_factor * objective / arcs used`. The best solution under the
//! unpenalized objective is kept throughout.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its
//! application to the traveling salesman problem", *European Journal of
//! Operational Research* 113(2), 469-499.

use std::time::Instant;

use tracing::debug;

use crate::evaluation::tour_cost;
use crate::local_search::{exchange_pass, expired, relocate_pass, two_opt_pass};
use crate::matrix::ArcCost;
use crate::models::DEPOT;

use super::FleetProblem;

/// Dense per-arc penalty counts, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PenaltyMatrix {
    data: Vec<u32>,
    size: usize,
}

impl PenaltyMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    fn get(&self, from: usize, to: usize) -> u32 {
        self.data[from * self.size + to]
    }

    fn increment(&mut self, from: usize, to: usize) {
        let cell = &mut self.data[from * self.size + to];
        *cell = cell.saturating_add(1);
    }

    /// Sum of penalties over the arcs of a route interior.
    fn route_sum(&self, interior: &[usize]) -> f64 {
        tour_cost(interior, DEPOT, self)
    }
}

impl ArcCost for PenaltyMatrix {
    fn arc(&self, from: usize, to: usize) -> f64 {
        f64::from(self.get(from, to))
    }
}

/// Arcs of a depot-anchored route given by its interior.
fn arcs(interior: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let legs = if interior.is_empty() { 0 } else { interior.len() + 1 };
    (0..legs).map(move |k| {
        let from = if k == 0 { DEPOT } else { interior[k - 1] };
        let to = interior.get(k).copied().unwrap_or(DEPOT);
        (from, to)
    })
}

/// Guided local search driver.
#[derive(Debug, Clone)]
pub(crate) struct GuidedLocalSearch {
    penalty_factor: f64,
    max_iterations: Option<usize>,
}

impl GuidedLocalSearch {
    pub(crate) fn new(penalty_factor: f64, max_iterations: Option<usize>) -> Self {
        Self {
            penalty_factor,
            max_iterations,
        }
    }

    /// Improves `routes` until `deadline` or the iteration budget and
    /// returns the best routes found.
    ///
    /// The deadline is checked inside every descent as well, so an expired
    /// budget returns the best solution seen so far.
    pub(crate) fn improve(
        &self,
        problem: &FleetProblem<'_>,
        mut routes: Vec<Vec<usize>>,
        deadline: Instant,
    ) -> Vec<Vec<usize>> {
        let started = Instant::now();

        descend(&mut routes, &|r: &[usize]| problem.route_score(r), deadline);
        let mut best = routes.clone();
        let mut best_cost = problem.objective(&best);

        let arcs_used: usize = routes.iter().map(|r| arcs(r).count()).sum();
        let lambda = if arcs_used > 0 && best_cost.is_finite() {
            self.penalty_factor * best_cost / arcs_used as f64
        } else {
            0.0
        };
        if lambda <= 0.0 {
            debug!(best_cost, "guided local search skipped, no penalty scale");
            return best;
        }

        let mut penalties = PenaltyMatrix::new(problem.matrix().size());
        let within_iterations = |done: usize| self.max_iterations.map_or(true, |max| done < max);
        let mut iterations = 0usize;
        while Instant::now() < deadline && within_iterations(iterations) {
            iterations += 1;
            penalize_max_utility(&routes, problem, &mut penalties);

            let augmented = |r: &[usize]| problem.route_score(r) + lambda * penalties.route_sum(r);
            descend(&mut routes, &augmented, deadline);

            let cost = problem.objective(&routes);
            if cost < best_cost {
                best_cost = cost;
                best.clone_from(&routes);
            }
        }

        debug!(
            iterations,
            lambda,
            best_cost,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "guided local search finished"
        );
        best
    }
}

/// Runs the move passes until none of them improves or `deadline` passes.
fn descend<F>(routes: &mut [Vec<usize>], score: &F, deadline: Instant)
where
    F: Fn(&[usize]) -> f64,
{
    let deadline = Some(deadline);
    loop {
        let mut improved = relocate_pass(routes, score, deadline);
        improved |= exchange_pass(routes, score, deadline);
        improved |= two_opt_pass(routes, score, deadline);
        if !improved || expired(deadline) {
            break;
        }
    }
}

/// Raises the penalty of every arc with maximal utility in `routes`.
fn penalize_max_utility(
    routes: &[Vec<usize>],
    problem: &FleetProblem<'_>,
    penalties: &mut PenaltyMatrix,
) {
    let matrix = problem.matrix();
    let utility =
        |(a, b): (usize, usize)| matrix.arc(a, b) / (1.0 + f64::from(penalties.get(a, b)));

    let max = routes
        .iter()
        .flat_map(|r| arcs(r))
        .map(utility)
        .fold(f64::NEG_INFINITY, f64::max);

    let chosen: Vec<(usize, usize)> = routes
        .iter()
        .flat_map(|r| arcs(r))
        .filter(|&arc| utility(arc) >= max)
        .collect();
    for (a, b) in chosen {
        penalties.increment(a, b);
    }
}
