//! Engine configuration.
//!
//! All sections deserialize from JSON with defaults for missing fields and
//! expose `with_*` builders. The matrix provider credential has no default:
//! an engine without one fails validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RoutingError};
use crate::matrix::{ApiKey, CostUnit};

/// Genetic search parameters.
///
/// # Examples
///
/// ```
/// use u_delivery::config::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(config.clone().with_population_size(21).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Individuals per generation; must be even.
    pub population_size: usize,
    /// Fixed number of generations.
    pub generations: usize,
    /// Members sampled per tournament.
    pub tournament_size: usize,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            tournament_size: 2,
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks population and tournament sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if self.tournament_size < 2 || self.tournament_size > self.population_size {
            return Err(ConfigError::InvalidTournamentSize {
                size: self.tournament_size,
                population: self.population_size,
            });
        }
        Ok(())
    }
}

/// Search engine behind the fleet solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Guided local search over relocate, exchange and 2-opt moves.
    #[default]
    GuidedLocalSearch,
    /// Genetic search giant tour partitioned across vehicles.
    Genetic,
}

/// How the fleet solver repairs routes that exceed the cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Split only the most expensive route, once.
    WorstRouteOnce,
    /// Split every route over the cap until none can be split further.
    #[default]
    Exhaustive,
}

/// Fleet solver parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub backend: BackendKind,
    /// Wall-clock budget for the backend search.
    pub time_limit_ms: u64,
    /// Optional cap on guided local search iterations.
    pub max_iterations: Option<usize>,
    /// Guided local search lambda scale.
    pub penalty_factor: f64,
    /// Weight of route cost above the cap in the backend objective.
    pub cap_overflow_weight: f64,
    pub split_policy: SplitPolicy,
    /// RNG seed for the backend; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            time_limit_ms: 1000,
            max_iterations: None,
            penalty_factor: 0.1,
            cap_overflow_weight: 1.0,
            split_policy: SplitPolicy::default(),
            seed: None,
        }
    }
}

impl FleetConfig {
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    pub fn with_penalty_factor(mut self, factor: f64) -> Self {
        self.penalty_factor = factor;
        self
    }

    pub fn with_cap_overflow_weight(mut self, weight: f64) -> Self {
        self.cap_overflow_weight = weight;
        self
    }

    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Backend search budget.
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.penalty_factor.is_finite() || self.penalty_factor < 0.0 {
            return Err(ConfigError::InvalidPenaltyFactor(self.penalty_factor));
        }
        if !self.cap_overflow_weight.is_finite() || self.cap_overflow_weight < 0.0 {
            return Err(ConfigError::InvalidOverflowWeight(self.cap_overflow_weight));
        }
        Ok(())
    }
}

/// Complete engine configuration.
///
/// # Examples
///
/// ```
/// use u_delivery::config::{BackendKind, EngineConfig};
/// use u_delivery::matrix::CostUnit;
///
/// let config = EngineConfig::from_json_str(r#"{
///     "unit": "duration",
///     "api_key": "k-123",
///     "fleet": { "backend": "genetic", "time_limit_ms": 250 }
/// }"#).unwrap();
/// assert_eq!(config.unit, CostUnit::Duration);
/// assert_eq!(config.fleet.backend, BackendKind::Genetic);
/// assert_eq!(config.genetic.population_size, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub unit: CostUnit,
    pub genetic: GeneticConfig,
    pub fleet: FleetConfig,
    /// Matrix provider credential. Required.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl EngineConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, RoutingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_unit(mut self, unit: CostUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    pub fn with_fleet(mut self, fleet: FleetConfig) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Returns the configured credential.
    pub fn credential(&self) -> Result<ApiKey, ConfigError> {
        match &self.api_key {
            Some(key) => ApiKey::new(key.as_str()),
            None => Err(ConfigError::MissingCredential),
        }
    }

    /// Validates every section, including the credential.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credential()?;
        self.fleet.validate()?;
        if self.fleet.backend == BackendKind::Genetic {
            self.genetic.validate()?;
        }
        Ok(())
    }
}
