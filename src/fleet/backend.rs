//! Fleet search backends.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;

use crate::config::GeneticConfig;
use crate::constructive::nearest_neighbor_tour;
use crate::ga::GeneticSearch;
use crate::models::DEPOT;

use super::gls::GuidedLocalSearch;
use super::{partition_tour, FleetProblem};

/// A search strategy that assigns stops to vehicles.
///
/// Implementations return one route interior per vehicle (possibly empty),
/// or `None` when they cannot produce a solution. The fleet solver checks
/// coverage and costs, so a backend need not.
pub trait FleetBackend {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn solve(&self, problem: &FleetProblem<'_>, rng: &mut StdRng) -> Option<Vec<Vec<usize>>>;
}

/// Nearest-neighbour construction, bounded partition, then guided local search.
///
/// The time limit covers construction as well as the search.
#[derive(Debug, Clone)]
pub struct GlsBackend {
    penalty_factor: f64,
    time_limit: Duration,
    max_iterations: Option<usize>,
}

impl GlsBackend {
    pub fn new(penalty_factor: f64, time_limit: Duration, max_iterations: Option<usize>) -> Self {
        Self {
            penalty_factor,
            time_limit,
            max_iterations,
        }
    }
}

impl FleetBackend for GlsBackend {
    fn name(&self) -> &'static str {
        "guided_local_search"
    }

    fn solve(&self, problem: &FleetProblem<'_>, _rng: &mut StdRng) -> Option<Vec<Vec<usize>>> {
        let deadline = Instant::now() + self.time_limit;
        let tour = nearest_neighbor_tour(problem.matrix(), DEPOT);
        let routes = partition_tour(&tour, problem);
        let search = GuidedLocalSearch::new(self.penalty_factor, self.max_iterations);
        Some(search.improve(problem, routes, deadline))
    }
}

/// Genetic giant tour split into at most `V` routes.
#[derive(Debug, Clone)]
pub struct GeneticBackend {
    config: GeneticConfig,
}

impl GeneticBackend {
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }
}

impl FleetBackend for GeneticBackend {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn solve(&self, problem: &FleetProblem<'_>, rng: &mut StdRng) -> Option<Vec<Vec<usize>>> {
        let search = GeneticSearch::new(problem.matrix(), self.config.clone()).ok()?;
        let result = search.run_with(rng);
        Some(partition_tour(result.route.interior(), problem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;
    use rand::SeedableRng;

    fn line(size: usize) -> CostMatrix {
        CostMatrix::from_lookups(size, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid")
    }

    fn covered(routes: &[Vec<usize>]) -> Vec<usize> {
        let mut stops = routes.concat();
        stops.sort_unstable();
        stops
    }

    #[test]
    fn test_gls_one_route_per_vehicle() {
        let m = line(6);
        let problem = FleetProblem::new(&m, 3, 100.0, 1.0);
        let backend = GlsBackend::new(0.1, Duration::from_secs(5), Some(10));
        let mut rng = StdRng::seed_from_u64(1);
        let routes = backend.solve(&problem, &mut rng).expect("solution");
        assert_eq!(routes.len(), 3);
        assert_eq!(covered(&routes), vec![1, 2, 3, 4, 5]);
        assert_eq!(problem.objective(&routes), 10.0);
    }

    #[test]
    fn test_genetic_backend_covers_all() {
        let m = line(6);
        let problem = FleetProblem::new(&m, 2, 100.0, 1.0);
        let config = GeneticConfig::default()
            .with_population_size(10)
            .with_generations(10);
        let backend = GeneticBackend::new(config);
        let mut rng = StdRng::seed_from_u64(4);
        let routes = backend.solve(&problem, &mut rng).expect("solution");
        assert_eq!(routes.len(), 2);
        assert_eq!(covered(&routes), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_genetic_backend_rejects_invalid_config() {
        let m = line(4);
        let problem = FleetProblem::new(&m, 1, 100.0, 1.0);
        let backend = GeneticBackend::new(GeneticConfig::default().with_population_size(3));
        let mut rng = StdRng::seed_from_u64(4);
        assert!(backend.solve(&problem, &mut rng).is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(GlsBackend::new(0.1, Duration::ZERO, None).name(), "guided_local_search");
        assert_eq!(GeneticBackend::new(GeneticConfig::default()).name(), "genetic");
    }
}
