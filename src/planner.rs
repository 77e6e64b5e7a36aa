//! Caller-facing optimize operation.
//!
//! A [`Planner`] ties the pieces together for one request: it checks the
//! configuration, fetches the cost matrix for the depot and stop labels,
//! converts the cap into matrix units and runs the fleet solver.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EngineConfig;
use crate::error::{ConfigError, RoutingError};
use crate::fleet::FleetSolver;
use crate::matrix::MatrixProvider;
use crate::models::{FleetOutcome, Stop};

/// One optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Depot label (the firm's address).
    pub depot: String,
    /// Delivery labels, in input order.
    pub stops: Vec<String>,
    /// Number of vehicles.
    pub vehicles: usize,
    /// Per-route cap in the configured external unit (kilometers or hours).
    pub cap: f64,
}

/// A route expressed with the caller's labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    /// Labels from depot to depot.
    pub stops: Vec<String>,
    /// Route cost in matrix units (meters or seconds).
    pub cost: f64,
}

/// Outcome of [`Planner::optimize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "routes", rename_all = "snake_case")]
pub enum OptimizeResponse {
    Routes(Vec<PlannedRoute>),
    NoSolution,
}

/// Runs optimization requests against a matrix provider.
///
/// # Examples
///
/// ```
/// use u_delivery::config::{EngineConfig, FleetConfig};
/// use u_delivery::matrix::{CostMatrix, StaticMatrixProvider};
/// use u_delivery::planner::{OptimizeRequest, OptimizeResponse, Planner};
///
/// let m = CostMatrix::from_lookups(3, true, |_, _| Some(1000.0)).unwrap();
/// let config = EngineConfig::default()
///     .with_api_key("offline")
///     .with_fleet(FleetConfig::default().with_max_iterations(5).with_seed(1));
/// let planner = Planner::new(config, StaticMatrixProvider::new(m));
///
/// let request = OptimizeRequest {
///     depot: "Firm".into(),
///     stops: vec!["A".into(), "B".into()],
///     vehicles: 1,
///     cap: 10.0,
/// };
/// match planner.optimize(&request).unwrap() {
///     OptimizeResponse::Routes(routes) => {
///         assert_eq!(routes.len(), 1);
///         assert_eq!(routes[0].stops.first().map(String::as_str), Some("Firm"));
///         assert_eq!(routes[0].cost, 3000.0);
///     }
///     OptimizeResponse::NoSolution => unreachable!(),
/// }
/// ```
pub struct Planner<P> {
    config: EngineConfig,
    provider: P,
}

impl<P: MatrixProvider> Planner<P> {
    pub fn new(config: EngineConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// Plans routes for one request.
    ///
    /// Invalid configuration or requests fail before the provider is called.
    /// A search that finds no feasible plan returns
    /// [`OptimizeResponse::NoSolution`].
    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, RoutingError> {
        self.config.validate()?;
        let api_key = self.config.credential()?;
        if request.stops.is_empty() {
            return Err(ConfigError::NoStops.into());
        }
        if request.vehicles == 0 {
            return Err(ConfigError::NoVehicles.into());
        }
        if !request.cap.is_finite() || request.cap <= 0.0 {
            return Err(ConfigError::InvalidCap(request.cap).into());
        }

        info!(
            stops = request.stops.len(),
            vehicles = request.vehicles,
            cap = request.cap,
            unit = ?self.config.unit,
            "optimizing deliveries"
        );

        let locations = Stop::with_depot(&request.depot, &request.stops);
        let labels: Vec<String> = locations.iter().map(|s| s.label().to_string()).collect();
        let matrix = self.provider.fetch(&labels, &api_key)?;
        if matrix.size() != labels.len() {
            return Err(ConfigError::MatrixSizeMismatch {
                matrix: matrix.size(),
                labels: labels.len(),
            }
            .into());
        }

        let cap = self.config.unit.to_internal(request.cap);
        let outcome = FleetSolver::new(&matrix, self.config.fleet.clone())
            .with_genetic(self.config.genetic.clone())
            .solve(request.vehicles, cap)?;

        let response = match outcome {
            FleetOutcome::Solved(plan) => OptimizeResponse::Routes(
                plan.iter()
                    .map(|(route, cost)| PlannedRoute {
                        stops: route
                            .stops()
                            .iter()
                            .map(|&i| locations[i].label().to_string())
                            .collect(),
                        cost,
                    })
                    .collect(),
            ),
            FleetOutcome::Infeasible => OptimizeResponse::NoSolution,
        };

        match &response {
            OptimizeResponse::Routes(routes) => info!(routes = routes.len(), "deliveries planned"),
            OptimizeResponse::NoSolution => info!("no feasible delivery plan"),
        }
        Ok(response)
    }
}
