//! Multi-vehicle solver with cap post-correction.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{BackendKind, FleetConfig, GeneticConfig, SplitPolicy};
use crate::error::{ConfigError, RoutingError};
use crate::evaluation::TourEvaluator;
use crate::matrix::CostMatrix;
use crate::models::{FleetOutcome, Route, RoutePlan, DEPOT};
use crate::splitter::split_route;

use super::{FleetBackend, FleetProblem, GeneticBackend, GlsBackend};

/// Assigns every stop of a matrix to a fleet of vehicles.
///
/// The configured backend produces at most one route per vehicle. With more
/// than one vehicle, routes over the cap are then split into extra depot
/// trips according to the [`SplitPolicy`].
///
/// # Examples
///
/// ```
/// use u_delivery::config::FleetConfig;
/// use u_delivery::fleet::FleetSolver;
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_lookups(4, true, |_, _| Some(1.0)).unwrap();
/// let config = FleetConfig::default().with_max_iterations(10).with_seed(1);
/// let outcome = FleetSolver::new(&m, config).solve(1, 100.0).unwrap();
///
/// let plan = outcome.plan().unwrap();
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.total_cost(), 4.0);
/// ```
pub struct FleetSolver<'a> {
    matrix: &'a CostMatrix,
    config: FleetConfig,
    genetic: GeneticConfig,
}

impl<'a> FleetSolver<'a> {
    pub fn new(matrix: &'a CostMatrix, config: FleetConfig) -> Self {
        Self {
            matrix,
            config,
            genetic: GeneticConfig::default(),
        }
    }

    /// Genetic search settings used by [`BackendKind::Genetic`].
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Solves with the configured backend and seed.
    pub fn solve(&self, vehicles: usize, cap: f64) -> Result<FleetOutcome, RoutingError> {
        self.validate(vehicles, cap)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let backend: Box<dyn FleetBackend> = match self.config.backend {
            BackendKind::GuidedLocalSearch => Box::new(GlsBackend::new(
                self.config.penalty_factor,
                self.config.time_limit(),
                self.config.max_iterations,
            )),
            BackendKind::Genetic => Box::new(GeneticBackend::new(self.genetic.clone())),
        };
        self.solve_with(backend.as_ref(), vehicles, cap, &mut rng)
    }

    /// Solves with a caller-supplied backend.
    pub fn solve_with(
        &self,
        backend: &dyn FleetBackend,
        vehicles: usize,
        cap: f64,
        rng: &mut StdRng,
    ) -> Result<FleetOutcome, RoutingError> {
        self.validate(vehicles, cap)?;
        let weight = self.config.cap_overflow_weight;
        let problem = FleetProblem::new(self.matrix, vehicles, cap, weight);

        let Some(assigned) = backend.solve(&problem, rng) else {
            warn!(backend = backend.name(), "backend returned no solution");
            return Ok(FleetOutcome::Infeasible);
        };
        if assigned.len() > vehicles {
            warn!(
                backend = backend.name(),
                routes = assigned.len(),
                vehicles,
                "backend used too many vehicles"
            );
            return Ok(FleetOutcome::Infeasible);
        }
        if !covers_every_stop_once(&assigned, self.matrix.size()) {
            warn!(
                backend = backend.name(),
                "backend solution does not cover every stop exactly once"
            );
            return Ok(FleetOutcome::Infeasible);
        }

        let evaluator = TourEvaluator::new(self.matrix);
        let mut routes: Vec<Route> = assigned
            .into_iter()
            .filter(|r| !r.is_empty())
            .map(Route::from_interior)
            .collect();

        if vehicles > 1 {
            routes = self.correct_caps(routes, cap, &evaluator)?;
        }

        let mut plan = RoutePlan::new();
        for route in routes {
            let cost = evaluator.cost(&route)?;
            if !cost.is_finite() {
                warn!(stops = route.len(), "route uses an arc of unknown cost");
                return Ok(FleetOutcome::Infeasible);
            }
            plan.push(route, cost);
        }

        info!(
            backend = backend.name(),
            vehicles,
            routes = plan.num_routes(),
            total_cost = plan.total_cost(),
            max_cost = plan.max_cost(),
            "fleet solved"
        );
        Ok(FleetOutcome::Solved(plan))
    }

    fn validate(&self, vehicles: usize, cap: f64) -> Result<(), ConfigError> {
        if self.matrix.size() <= 1 {
            return Err(ConfigError::MatrixTooSmall(self.matrix.size()));
        }
        if vehicles == 0 {
            return Err(ConfigError::NoVehicles);
        }
        if !cap.is_finite() || cap <= 0.0 {
            return Err(ConfigError::InvalidCap(cap));
        }
        self.config.validate()?;
        if self.config.backend == BackendKind::Genetic {
            self.genetic.validate()?;
        }
        Ok(())
    }

    /// Replaces over-cap routes by their split sub-routes.
    fn correct_caps(
        &self,
        routes: Vec<Route>,
        cap: f64,
        evaluator: &TourEvaluator<'_>,
    ) -> Result<Vec<Route>, RoutingError> {
        let costs = routes
            .iter()
            .map(|r| evaluator.cost(r))
            .collect::<Result<Vec<f64>, _>>()?;

        match self.config.split_policy {
            SplitPolicy::WorstRouteOnce => {
                let worst = costs
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.total_cmp(b.1).then(b.0.cmp(&a.0)))
                    .map(|(i, &c)| (i, c));
                let mut routes = routes;
                if let Some((i, cost)) = worst {
                    if cost > cap {
                        let parts = split_route(&routes[i], self.matrix, cap);
                        debug!(
                            route = i,
                            cost,
                            cap,
                            parts = parts.len(),
                            "splitting worst route"
                        );
                        let tail = routes.split_off(i + 1);
                        routes.truncate(i);
                        routes.extend(parts);
                        routes.extend(tail);
                    }
                }
                Ok(routes)
            }
            SplitPolicy::Exhaustive => {
                let mut corrected = Vec::with_capacity(routes.len());
                for (i, (route, cost)) in routes.into_iter().zip(costs).enumerate() {
                    if cost > cap {
                        let parts = split_route(&route, self.matrix, cap);
                        debug!(
                            route = i,
                            cost,
                            cap,
                            parts = parts.len(),
                            "splitting route over cap"
                        );
                        corrected.extend(parts);
                    } else {
                        corrected.push(route);
                    }
                }
                Ok(corrected)
            }
        }
    }
}

/// Checks that `routes` visit each of the stops `1..size` exactly once.
fn covers_every_stop_once(routes: &[Vec<usize>], size: usize) -> bool {
    let mut seen = vec![false; size];
    for &stop in routes.iter().flatten() {
        if stop == DEPOT || stop >= size || seen[stop] {
            return false;
        }
        seen[stop] = true;
    }
    seen.iter().skip(1).all(|&s| s)
}
