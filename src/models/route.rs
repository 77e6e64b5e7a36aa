//! Depot-anchored route type.

use serde::Serialize;

use crate::error::RoutingError;

/// Index of the depot in every cost matrix.
pub const DEPOT: usize = 0;

/// An ordered sequence of stops assigned to one vehicle trip.
///
/// Always starts and ends at the [`DEPOT`]; the stops in between are the
/// route's interior. Routes are not modified once built.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Route;
///
/// let route = Route::from_interior(vec![3, 1, 2]);
/// assert_eq!(route.stops(), &[0, 3, 1, 2, 0]);
/// assert_eq!(route.interior(), &[3, 1, 2]);
/// assert_eq!(route.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Anchors an interior sequence with the depot at both ends.
    pub fn from_interior(interior: Vec<usize>) -> Self {
        let mut stops = Vec::with_capacity(interior.len() + 2);
        stops.push(DEPOT);
        stops.extend(interior);
        stops.push(DEPOT);
        Self { stops }
    }

    /// Builds a route from a full stop sequence, checking the depot anchors.
    pub fn from_stops(stops: Vec<usize>) -> Result<Self, RoutingError> {
        let anchored = stops.len() >= 2
            && stops.first() == Some(&DEPOT)
            && stops.last() == Some(&DEPOT);
        if !anchored {
            return Err(RoutingError::NotDepotAnchored(DEPOT));
        }
        Ok(Self { stops })
    }

    /// Full stop sequence including both depot anchors.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Stops between the depot anchors.
    pub fn interior(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of stops visited (excluding the depot anchors).
    pub fn len(&self) -> usize {
        self.stops.len() - 2
    }

    /// Returns `true` if the route visits no stop.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_route() {
        let r = Route::from_interior(vec![]);
        assert_eq!(r.stops(), &[0, 0]);
        assert!(r.is_empty());
        assert!(r.interior().is_empty());
    }

    #[test]
    fn test_from_stops_requires_anchors() {
        assert!(Route::from_stops(vec![0, 2, 1, 0]).is_ok());
        assert!(matches!(
            Route::from_stops(vec![2, 1, 0]),
            Err(RoutingError::NotDepotAnchored(0))
        ));
        assert!(Route::from_stops(vec![0]).is_err());
        assert!(Route::from_stops(vec![]).is_err());
    }
}
