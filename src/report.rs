//! Plain-text rendering of planned routes.

use crate::matrix::CostUnit;
use crate::planner::OptimizeResponse;

/// Renders a response as one block per vehicle.
///
/// Distances are shown in kilometers with two decimals, durations as
/// hours, minutes and seconds.
///
/// # Examples
///
/// ```
/// use u_delivery::matrix::CostUnit;
/// use u_delivery::planner::{OptimizeResponse, PlannedRoute};
/// use u_delivery::report::format_report;
///
/// let response = OptimizeResponse::Routes(vec![PlannedRoute {
///     stops: vec!["Firm".into(), "A".into(), "Firm".into()],
///     cost: 12346.0,
/// }]);
/// assert_eq!(
///     format_report(&response, CostUnit::Distance),
///     "Optimal Route for Vehicle 1: Firm -> A -> Firm\n\
///      Total Road Distance for Vehicle 1: 12.35 kilometers\n\n"
/// );
/// ```
pub fn format_report(response: &OptimizeResponse, unit: CostUnit) -> String {
    let routes = match response {
        OptimizeResponse::Routes(routes) => routes,
        OptimizeResponse::NoSolution => return "No solution found.".to_string(),
    };

    let mut out = String::new();
    for (i, route) in routes.iter().enumerate() {
        let vehicle = i + 1;
        out.push_str(&format!(
            "Optimal Route for Vehicle {vehicle}: {}\n",
            route.stops.join(" -> ")
        ));
        out.push_str(&match unit {
            CostUnit::Distance => format!(
                "Total Road Distance for Vehicle {vehicle}: {:.2} kilometers\n",
                unit.to_external(route.cost)
            ),
            CostUnit::Duration => format!(
                "Total Road Time for Vehicle {vehicle}: {}\n",
                format_hms(route.cost)
            ),
        });
        out.push('\n');
    }
    out
}

/// Formats a duration in seconds as `{h}h {m}m {s}s`, rounded to whole seconds.
///
/// ```
/// use u_delivery::report::format_hms;
///
/// assert_eq!(format_hms(3723.0), "1h 2m 3s");
/// assert_eq!(format_hms(59.6), "0h 1m 0s");
/// ```
pub fn format_hms(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::PlannedRoute;

    fn route(stops: &[&str], cost: f64) -> PlannedRoute {
        PlannedRoute {
            stops: stops.iter().map(|s| s.to_string()).collect(),
            cost,
        }
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(
            format_report(&OptimizeResponse::NoSolution, CostUnit::Distance),
            "No solution found."
        );
    }

    #[test]
    fn test_vehicles_numbered_from_one() {
        let response = OptimizeResponse::Routes(vec![
            route(&["Firm", "A", "Firm"], 1000.0),
            route(&["Firm", "B", "C", "Firm"], 2500.0),
        ]);
        let text = format_report(&response, CostUnit::Distance);
        assert!(text.contains("Optimal Route for Vehicle 1: Firm -> A -> Firm\n"));
        assert!(text.contains("Total Road Distance for Vehicle 1: 1.00 kilometers\n"));
        assert!(text.contains("Optimal Route for Vehicle 2: Firm -> B -> C -> Firm\n"));
        assert!(text.contains("Total Road Distance for Vehicle 2: 2.50 kilometers\n"));
    }

    #[test]
    fn test_duration_report() {
        let response = OptimizeResponse::Routes(vec![route(&["Firm", "A", "Firm"], 5400.0)]);
        assert_eq!(
            format_report(&response, CostUnit::Duration),
            "Optimal Route for Vehicle 1: Firm -> A -> Firm\n\
             Total Road Time for Vehicle 1: 1h 30m 0s\n\n"
        );
    }

    #[test]
    fn test_empty_plan_renders_nothing() {
        assert_eq!(format_report(&OptimizeResponse::Routes(vec![]), CostUnit::Duration), "");
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0.0), "0h 0m 0s");
        assert_eq!(format_hms(86399.0), "23h 59m 59s");
        assert_eq!(format_hms(90000.0), "25h 0m 0s");
        assert_eq!(format_hms(-5.0), "0h 0m 0s");
    }
}
