//! Stop type.

use serde::{Deserialize, Serialize};

/// A delivery location: matrix index plus the caller's label (address).
///
/// Index 0 is the depot. The label is carried for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    index: usize,
    label: String,
}

impl Stop {
    /// Creates a stop.
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }

    /// Builds the stop list for a depot and its deliveries (depot first).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_delivery::models::Stop;
    ///
    /// let stops = Stop::with_depot("Firm", &["A".to_string(), "B".to_string()]);
    /// assert_eq!(stops[0].label(), "Firm");
    /// assert!(stops[0].is_depot());
    /// assert_eq!(stops[2].index(), 2);
    /// ```
    pub fn with_depot(depot: &str, deliveries: &[String]) -> Vec<Self> {
        std::iter::once(depot)
            .chain(deliveries.iter().map(String::as_str))
            .enumerate()
            .map(|(index, label)| Self::new(index, label))
            .collect()
    }

    /// Matrix index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// External label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.index == super::DEPOT
    }
}
