//! Greedy cap-driven route splitting.
//!
//! # Algorithm
//!
//! Walks the stops of a route in order, keeping the running cost of the
//! current sub-route from the depot through its last stop (the return leg
//! is not counted). When the leg to the next stop would push the running
//! cost over the cap, the current sub-route is closed at the depot and a
//! new one starts with the depot leg to that stop.
//!
//! A sub-route always holds at least one stop: a stop whose depot leg alone
//! exceeds the cap forms a one-stop sub-route rather than being dropped.
//!
//! # Complexity
//!
//! O(n) in the route length.

use crate::evaluation::route_cost;
use crate::matrix::ArcCost;
use crate::models::{Route, DEPOT};

/// Splits a route into depot-anchored sub-routes under a cost cap.
///
/// Stop order is never changed: the sub-route interiors, concatenated,
/// reproduce the input interior. A route whose total cost is within the cap
/// is returned unchanged as the only sub-route.
///
/// # Examples
///
/// ```
/// use u_delivery::matrix::CostMatrix;
/// use u_delivery::models::Route;
/// use u_delivery::splitter::split_route;
///
/// // Depot at 0, stops at 1, 2, 3 on a line.
/// let m = CostMatrix::from_lookups(4, true, |i, j| Some((i as f64 - j as f64).abs())).unwrap();
/// let route = Route::from_interior(vec![1, 2, 3]);
///
/// let parts = split_route(&route, &m, 2.0);
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].stops(), &[0, 1, 2, 0]);
/// assert_eq!(parts[1].stops(), &[0, 3, 0]);
/// ```
pub fn split_route<C: ArcCost + ?Sized>(route: &Route, costs: &C, cap: f64) -> Vec<Route> {
    if route.is_empty() || route_cost(route.stops(), costs) <= cap {
        return vec![route.clone()];
    }

    let mut sub_routes = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut running = 0.0;
    let mut prev = DEPOT;

    for &stop in route.interior() {
        let leg = costs.arc(prev, stop);
        if !current.is_empty() && running + leg > cap {
            sub_routes.push(Route::from_interior(std::mem::take(&mut current)));
            running = costs.arc(DEPOT, stop);
        } else {
            running += leg;
        }
        current.push(stop);
        prev = stop;
    }

    if !current.is_empty() {
        sub_routes.push(Route::from_interior(current));
    }
    sub_routes
}
