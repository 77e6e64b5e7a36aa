//! Error types.
//!
//! Configuration problems are reported before any search starts. An
//! infeasible solve is not an error: it is returned as
//! [`FleetOutcome::Infeasible`](crate::models::FleetOutcome).

use thiserror::Error;

/// Invalid input detected before optimization begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cost matrix must cover the depot and at least one stop, got size {0}")]
    MatrixTooSmall(usize),

    #[error("cost matrix data has {len} entries, expected {size}x{size}")]
    MatrixDataLength { size: usize, len: usize },

    #[error("cost matrix row {row} has {len} entries, expected {size}")]
    NonSquareMatrix { row: usize, len: usize, size: usize },

    #[error("invalid cost {value} from {from} to {to}")]
    InvalidEntry { from: usize, to: usize, value: f64 },

    #[error("cost matrix covers {matrix} locations but {labels} were requested")]
    MatrixSizeMismatch { matrix: usize, labels: usize },

    #[error("no stops to deliver")]
    NoStops,

    #[error("vehicle count must be at least 1")]
    NoVehicles,

    #[error("cost cap must be a positive finite number, got {0}")]
    InvalidCap(f64),

    #[error("population size must be even and non-zero, got {0}")]
    InvalidPopulationSize(usize),

    #[error("tournament size must be in [2, {population}], got {size}")]
    InvalidTournamentSize { size: usize, population: usize },

    #[error("guided local search penalty factor must be non-negative, got {0}")]
    InvalidPenaltyFactor(f64),

    #[error("cap overflow weight must be non-negative, got {0}")]
    InvalidOverflowWeight(f64),

    #[error("matrix provider credential is not configured")]
    MissingCredential,
}

/// Errors raised by the routing engine.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("stop {stop} is outside the cost matrix of size {size}")]
    StopOutOfRange { stop: usize, size: usize },

    #[error("stop {0} is visited more than once")]
    RepeatedStop(usize),

    #[error("route must start and end at depot {0}")]
    NotDepotAnchored(usize),

    #[error("matrix provider failed: {0}")]
    Provider(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
