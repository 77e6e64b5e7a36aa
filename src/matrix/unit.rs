//! Cost units and boundary conversion.

use serde::{Deserialize, Serialize};

/// Unit of the cost matrix and of the caller-facing cap.
///
/// The engine always works in meters or seconds. Callers express the cap in
/// kilometers or hours; [`CostUnit::to_internal`] converts at the boundary.
///
/// # Examples
///
/// ```
/// use u_delivery::matrix::CostUnit;
///
/// assert_eq!(CostUnit::Distance.to_internal(2.5), 2500.0);
/// assert_eq!(CostUnit::Duration.to_internal(1.0), 3600.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostUnit {
    /// Matrix in meters, cap in kilometers.
    #[default]
    Distance,
    /// Matrix in seconds, cap in hours.
    Duration,
}

impl CostUnit {
    /// Internal units per external unit.
    pub fn factor(self) -> f64 {
        match self {
            CostUnit::Distance => 1000.0,
            CostUnit::Duration => 3600.0,
        }
    }

    /// Converts a caller value (kilometers or hours) into matrix units.
    pub fn to_internal(self, external: f64) -> f64 {
        external * self.factor()
    }

    /// Converts a matrix value back into the caller's unit.
    pub fn to_external(self, internal: f64) -> f64 {
        internal / self.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_identity() {
        for unit in [CostUnit::Distance, CostUnit::Duration] {
            assert!((unit.to_external(unit.to_internal(1.75)) - 1.75).abs() < 1e-12);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CostUnit::Duration).expect("serialize");
        assert_eq!(json, "\"duration\"");
        let unit: CostUnit = serde_json::from_str("\"distance\"").expect("deserialize");
        assert_eq!(unit, CostUnit::Distance);
    }
}
