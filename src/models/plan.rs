//! Route plans and solve outcomes.

use serde::Serialize;

use super::Route;

/// The final set of routes produced for a fleet, with per-route costs.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Route, RoutePlan};
///
/// let mut plan = RoutePlan::new();
/// plan.push(Route::from_interior(vec![1, 2]), 7.0);
/// plan.push(Route::from_interior(vec![3]), 4.0);
/// assert_eq!(plan.num_routes(), 2);
/// assert_eq!(plan.num_served(), 3);
/// assert_eq!(plan.total_cost(), 11.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePlan {
    routes: Vec<Route>,
    costs: Vec<f64>,
}

impl RoutePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route with its evaluated cost.
    pub fn push(&mut self, route: Route, cost: f64) {
        self.routes.push(route);
        self.costs.push(cost);
    }

    /// Routes in this plan.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Cost of each route, aligned with [`routes`](Self::routes).
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Iterates over `(route, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Route, f64)> {
        self.routes.iter().zip(self.costs.iter().copied())
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Sum of all route costs.
    pub fn total_cost(&self) -> f64 {
        self.costs.iter().sum()
    }

    /// Cost of the most expensive route, zero for an empty plan.
    pub fn max_cost(&self) -> f64 {
        self.costs.iter().copied().fold(0.0, f64::max)
    }
}

/// Result of a fleet solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "plan", rename_all = "snake_case")]
pub enum FleetOutcome {
    /// Every stop is assigned to exactly one route.
    Solved(RoutePlan),
    /// No feasible assignment was found within the search budget.
    Infeasible,
}

impl FleetOutcome {
    /// Returns the plan if one was found.
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            FleetOutcome::Solved(plan) => Some(plan),
            FleetOutcome::Infeasible => None,
        }
    }

    /// Returns `true` if a plan was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, FleetOutcome::Solved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = RoutePlan::new();
        assert_eq!(plan.num_routes(), 0);
        assert_eq!(plan.total_cost(), 0.0);
        assert_eq!(plan.max_cost(), 0.0);
    }

    #[test]
    fn test_max_cost() {
        let mut plan = RoutePlan::new();
        plan.push(Route::from_interior(vec![1]), 3.0);
        plan.push(Route::from_interior(vec![2]), 9.0);
        plan.push(Route::from_interior(vec![3]), 5.0);
        assert_eq!(plan.max_cost(), 9.0);
        let pairs: Vec<f64> = plan.iter().map(|(_, c)| c).collect();
        assert_eq!(pairs, vec![3.0, 9.0, 5.0]);
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = FleetOutcome::Solved(RoutePlan::new());
        assert!(outcome.is_solved());
        assert!(outcome.plan().is_some());
        assert!(FleetOutcome::Infeasible.plan().is_none());
    }
}
