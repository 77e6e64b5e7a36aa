//! Bounded split of a giant tour into at most `V` routes.
//!
//! # Algorithm
//!
//! Models the partition as a shortest path on an auxiliary graph where node
//! `j` is the boundary after the `j`-th stop of the giant tour and an edge
//! `(i, j)` serves `tour[i..j]` in one route, weighted by the route score
//! (transit cost plus weighted cap overflow). A layer per route count keeps
//! the path within the fleet size.
//!
//! # Complexity
//!
//! O(V × n²) where n = number of stops.
//!
//! # Reference
//!
//! Prins, C. (2004). "A simple and effective evolutionary algorithm for the
//! vehicle routing problem", *Computers & Operations Research* 31(12), 1985-2002.

use crate::matrix::ArcCost;
use crate::models::DEPOT;

use super::FleetProblem;

/// Splits `tour` into exactly `problem.vehicles()` route interiors.
///
/// Routes keep the tour order; unused vehicles get empty routes at the end.
/// If every partition has infinite cost (unknown arcs), the whole tour is
/// returned as the first route.
///
/// # Examples
///
/// ```
/// use u_delivery::fleet::{partition_tour, FleetProblem};
/// use u_delivery::matrix::CostMatrix;
///
/// // Depot between two clusters on a line.
/// let pos = [0.0, -1.0, -2.0, 10.0, 11.0];
/// let m = CostMatrix::from_lookups(5, true, |i, j| Some(f64::abs(pos[i] - pos[j]))).unwrap();
/// let problem = FleetProblem::new(&m, 2, 23.0, 1.0);
///
/// let routes = partition_tour(&[1, 2, 3, 4], &problem);
/// assert_eq!(routes, vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn partition_tour(tour: &[usize], problem: &FleetProblem<'_>) -> Vec<Vec<usize>> {
    let n = tour.len();
    let vehicles = problem.vehicles().max(1);
    let costs = problem.matrix();

    // best[k][j] = cheapest cover of tour[..j] with exactly k routes
    // pred[k][j] = start of the last of those routes
    let mut best = vec![vec![f64::INFINITY; n + 1]; vehicles + 1];
    let mut pred = vec![vec![0usize; n + 1]; vehicles + 1];
    best[0][0] = 0.0;

    for k in 1..=vehicles {
        for i in 0..n {
            let base = best[k - 1][i];
            if base == f64::INFINITY {
                continue;
            }

            let mut outbound = 0.0;
            for j in i..n {
                let stop = tour[j];
                outbound += if j == i {
                    costs.arc(DEPOT, stop)
                } else {
                    costs.arc(tour[j - 1], stop)
                };
                let total = base + problem.penalized(outbound + costs.arc(stop, DEPOT));
                if total < best[k][j + 1] {
                    best[k][j + 1] = total;
                    pred[k][j + 1] = i;
                }
            }
        }
    }

    let mut routes = Vec::with_capacity(vehicles);
    let used = (1..=vehicles).min_by(|&a, &b| best[a][n].total_cmp(&best[b][n]));
    match used {
        Some(k) if n > 0 && best[k][n] < f64::INFINITY => {
            let mut j = n;
            for layer in (1..=k).rev() {
                let i = pred[layer][j];
                routes.push(tour[i..j].to_vec());
                j = i;
            }
            routes.reverse();
        }
        _ if n > 0 => routes.push(tour.to_vec()),
        _ => {}
    }

    routes.resize(vehicles, Vec::new());
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;

    fn line(size: usize) -> CostMatrix {
        CostMatrix::from_lookups(size, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid")
    }

    #[test]
    fn test_single_route_when_cap_allows() {
        let m = line(4);
        let problem = FleetProblem::new(&m, 3, 100.0, 1.0);
        let routes = partition_tour(&[1, 2, 3], &problem);
        assert_eq!(routes, vec![vec![1, 2, 3], vec![], vec![]]);
    }

    #[test]
    fn test_overflow_forces_split() {
        let m = CostMatrix::from_lookups(4, true, |_, _| Some(1.0)).expect("valid");
        // One route costs 4, scoring 14 over a cap of 3; two routes cost 2 + 3.
        let problem = FleetProblem::new(&m, 2, 3.0, 10.0);
        let routes = partition_tour(&[1, 2, 3], &problem);
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| !r.is_empty()));
        assert_eq!(problem.objective(&routes), 5.0);
        assert_eq!(routes.concat(), vec![1, 2, 3]);
    }

    #[test]
    fn test_never_exceeds_fleet() {
        let m = line(6);
        let problem = FleetProblem::new(&m, 2, 1.0, 100.0);
        let routes = partition_tour(&[1, 2, 3, 4, 5], &problem);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes.concat(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_tour() {
        let m = line(3);
        let problem = FleetProblem::new(&m, 2, 1.0, 1.0);
        assert_eq!(partition_tour(&[], &problem), vec![Vec::<usize>::new(), vec![]]);
    }

    #[test]
    fn test_unreachable_stop_kept_in_one_route() {
        let m = CostMatrix::from_lookups(3, true, |i, j| (i != 2 && j != 2).then_some(1.0))
            .expect("valid");
        let problem = FleetProblem::new(&m, 2, 10.0, 1.0);
        let routes = partition_tour(&[1, 2], &problem);
        assert_eq!(routes, vec![vec![1, 2], vec![]]);
    }
}
