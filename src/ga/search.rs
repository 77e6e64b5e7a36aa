//! Generational genetic search for a single depot-anchored tour.
//!
//! Each generation draws `P/2` parent pairs by tournament, applies
//! single-cut crossover and one swap mutation per child, and replaces the
//! whole population with the offspring. There is no elitism and no early
//! exit: the search runs for the configured number of generations and
//! returns the cheapest member of the final population.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::GeneticConfig;
use crate::error::ConfigError;
use crate::matrix::CostMatrix;
use crate::models::Route;

use super::operators::{single_cut_crossover, swap_mutation, tournament};
use super::Tour;

/// Outcome of a genetic search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Cheapest tour of the final population, depot-anchored.
    pub route: Route,
    /// Cost of [`route`](Self::route).
    pub cost: f64,
    /// Cheapest cost in the initial population.
    pub initial_best_cost: f64,
    /// Generations executed.
    pub generations: usize,
}

/// Genetic search over tours of a cost matrix.
///
/// # Examples
///
/// ```
/// use u_delivery::config::GeneticConfig;
/// use u_delivery::ga::GeneticSearch;
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_lookups(4, true, |_, _| Some(1.0)).unwrap();
/// let config = GeneticConfig::default()
///     .with_population_size(10)
///     .with_generations(20)
///     .with_seed(42);
///
/// let result = GeneticSearch::new(&m, config).unwrap().run();
/// assert_eq!(result.route.len(), 3);
/// assert_eq!(result.cost, 4.0);
/// ```
pub struct GeneticSearch<'a> {
    matrix: &'a CostMatrix,
    config: GeneticConfig,
}

impl<'a> GeneticSearch<'a> {
    /// Validates the configuration against the matrix.
    pub fn new(matrix: &'a CostMatrix, config: GeneticConfig) -> Result<Self, ConfigError> {
        if matrix.size() <= 1 {
            return Err(ConfigError::MatrixTooSmall(matrix.size()));
        }
        config.validate()?;
        Ok(Self { matrix, config })
    }

    /// Runs with the configured seed, or an OS-seeded RNG if none is set.
    pub fn run(&self) -> GaResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with(&mut rng)
    }

    /// Runs with a caller-supplied RNG.
    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> GaResult {
        let size = self.config.population_size;
        let mut population: Vec<Tour> = (0..size)
            .map(|_| Tour::random(self.matrix.size(), rng))
            .collect();
        let initial_best_cost = self.best_of(&population).1;

        for _ in 0..self.config.generations {
            let mut offspring = Vec::with_capacity(size);
            for _ in 0..size / 2 {
                let (parent1, parent2) =
                    tournament(&population, self.config.tournament_size, self.matrix, rng);
                let (mut child1, mut child2) = single_cut_crossover(parent1, parent2, rng);
                swap_mutation(&mut child1, rng);
                swap_mutation(&mut child2, rng);
                offspring.push(child1);
                offspring.push(child2);
            }
            population = offspring;
        }

        let (best, cost) = self.best_of(&population);
        debug!(
            stops = best.len(),
            generations = self.config.generations,
            initial_best_cost,
            cost,
            "genetic search finished"
        );

        GaResult {
            route: best.clone().into_route(),
            cost,
            initial_best_cost,
            generations: self.config.generations,
        }
    }

    fn best_of<'p>(&self, population: &'p [Tour]) -> (&'p Tour, f64) {
        population
            .iter()
            .map(|tour| (tour, tour.cost(self.matrix)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .expect("population is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(size: usize) -> CostMatrix {
        CostMatrix::from_lookups(size, true, |_, _| Some(1.0)).expect("valid")
    }

    fn line(size: usize) -> CostMatrix {
        CostMatrix::from_lookups(size, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid")
    }

    #[test]
    fn test_rejects_degenerate_matrix() {
        let m = CostMatrix::new(1);
        let err = GeneticSearch::new(&m, GeneticConfig::default()).err();
        assert_eq!(err, Some(ConfigError::MatrixTooSmall(1)));
    }

    #[test]
    fn test_rejects_odd_population() {
        let m = uniform(4);
        let config = GeneticConfig::default().with_population_size(7);
        assert_eq!(
            GeneticSearch::new(&m, config).err(),
            Some(ConfigError::InvalidPopulationSize(7))
        );
    }

    #[test]
    fn test_route_is_depot_anchored_permutation() {
        let m = line(7);
        let config = GeneticConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_seed(11);
        let result = GeneticSearch::new(&m, config).expect("valid").run();
        let stops = result.route.stops();
        assert_eq!(stops.first(), Some(&0));
        assert_eq!(stops.last(), Some(&0));
        let mut interior = result.route.interior().to_vec();
        interior.sort_unstable();
        assert_eq!(interior, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.generations, 30);
    }

    #[test]
    fn test_uniform_costs_any_order() {
        let m = uniform(4);
        let config = GeneticConfig::default()
            .with_population_size(10)
            .with_generations(5)
            .with_seed(3);
        let result = GeneticSearch::new(&m, config).expect("valid").run();
        assert_eq!(result.cost, 4.0);
        assert_eq!(result.initial_best_cost, 4.0);
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let m = line(6);
        let config = GeneticConfig::default()
            .with_population_size(8)
            .with_generations(0)
            .with_seed(5);
        let result = GeneticSearch::new(&m, config).expect("valid").run();
        assert_eq!(result.cost, result.initial_best_cost);
    }

    #[test]
    fn test_single_stop() {
        let m = line(2);
        let config = GeneticConfig::default()
            .with_population_size(4)
            .with_generations(3)
            .with_seed(1);
        let result = GeneticSearch::new(&m, config).expect("valid").run();
        assert_eq!(result.route.stops(), &[0, 1, 0]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let m = line(8);
        let config = GeneticConfig::default()
            .with_population_size(12)
            .with_generations(25)
            .with_seed(99);
        let a = GeneticSearch::new(&m, config.clone()).expect("valid").run();
        let b = GeneticSearch::new(&m, config).expect("valid").run();
        assert_eq!(a.route, b.route);
    }

    #[test]
    fn test_final_not_worse_than_initial_best_over_seeds() {
        // Symmetric 5-location matrix; improvement is statistical, not
        // guaranteed per run, so require it for most seeds.
        let m = line(5);
        let improved = (0..10u64)
            .filter(|&seed| {
                let config = GeneticConfig::default()
                    .with_population_size(10)
                    .with_generations(50)
                    .with_seed(seed);
                let result = GeneticSearch::new(&m, config).expect("valid").run();
                result.cost <= result.initial_best_cost + 1e-9
            })
            .count();
        assert!(improved >= 7, "only {improved} of 10 runs kept the initial best");
    }
}
