//! Boundary to the external matrix builder.

use std::fmt;

use crate::error::{ConfigError, RoutingError};

use super::CostMatrix;

/// Credential for the mapping service behind a [`MatrixProvider`].
///
/// There is no built-in default; the value is never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential, rejecting blank values.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self(key))
    }

    /// Returns the raw credential for use in a request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Builds the cost matrix for an ordered list of location labels.
///
/// `labels[0]` is the depot. Implementations return costs in matrix units
/// (meters or seconds) and should build through
/// [`CostMatrix::from_lookups`] so failed lookups become unknown arcs
/// rather than zero-cost edges.
pub trait MatrixProvider {
    /// Fetches the `labels.len()`×`labels.len()` cost matrix.
    fn fetch(&self, labels: &[String], api_key: &ApiKey) -> Result<CostMatrix, RoutingError>;
}

/// Serves a pre-built matrix, ignoring labels and credential.
///
/// # Examples
///
/// ```
/// use u_delivery::matrix::{ApiKey, CostMatrix, MatrixProvider, StaticMatrixProvider};
///
/// let provider = StaticMatrixProvider::new(CostMatrix::new(2));
/// let key = ApiKey::new("offline").unwrap();
/// let labels = vec!["depot".to_string(), "a".to_string()];
/// assert_eq!(provider.fetch(&labels, &key).unwrap().size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StaticMatrixProvider {
    matrix: CostMatrix,
}

impl StaticMatrixProvider {
    /// Creates a provider that always returns `matrix`.
    pub fn new(matrix: CostMatrix) -> Self {
        Self { matrix }
    }
}

impl MatrixProvider for StaticMatrixProvider {
    fn fetch(&self, _labels: &[String], _api_key: &ApiKey) -> Result<CostMatrix, RoutingError> {
        Ok(self.matrix.clone())
    }
}
