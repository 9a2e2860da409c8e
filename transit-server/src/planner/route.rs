//! Route types returned by the route finder.

use crate::domain::Minutes;

/// One hop of a route between adjacent stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    /// Travel time of the fastest connection between the two stations.
    pub minutes: Minutes,
}

/// A least-time route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations from origin to destination, both included.
    pub stations: Vec<String>,

    /// Hops between consecutive stations; one fewer than `stations`.
    pub legs: Vec<RouteLeg>,

    /// Sum of the leg travel times.
    pub total: Minutes,
}

impl Route {
    /// Build a route from its legs.
    ///
    /// With no legs the route is the single station `origin`.
    pub fn from_legs(origin: &str, legs: Vec<RouteLeg>) -> Self {
        let mut stations = Vec::with_capacity(legs.len() + 1);
        stations.push(origin.to_string());
        stations.extend(legs.iter().map(|leg| leg.to.clone()));
        let total = legs.iter().map(|leg| leg.minutes).sum();

        Self {
            stations,
            legs,
            total,
        }
    }

    /// Returns the origin station, or `None` for a route with no stations.
    pub fn origin(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    /// Returns the destination station, or `None` for a route with no stations.
    pub fn destination(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    /// Returns the number of hops.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }
}

/// Outcome of a route query.
///
/// Stations that are registered but not connected are a legitimate result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A least-time route exists.
    Found(Route),
    /// No sequence of connections joins the two stations.
    NoPathFound,
}

impl RouteOutcome {
    /// Returns the route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPathFound => None,
        }
    }

    /// Consumes the outcome, returning the route if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPathFound => None,
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(from: &str, to: &str, minutes: i64) -> RouteLeg {
        RouteLeg {
            from: from.into(),
            to: to.into(),
            minutes: Minutes::new(minutes).unwrap(),
        }
    }

    #[test]
    fn single_station_route() {
        let route = Route::from_legs("Dadar", vec![]);
        assert_eq!(route.stations, vec!["Dadar"]);
        assert_eq!(route.total, Minutes::ZERO);
        assert_eq!(route.origin(), Some("Dadar"));
        assert_eq!(route.destination(), Some("Dadar"));
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn route_from_legs() {
        let route = Route::from_legs(
            "Kurla",
            vec![leg("Kurla", "Tilak Nagar (LTT)", 3), leg("Tilak Nagar (LTT)", "Chembur", 3)],
        );
        assert_eq!(route.stations, vec!["Kurla", "Tilak Nagar (LTT)", "Chembur"]);
        assert_eq!(route.total.get(), 6);
        assert_eq!(route.destination(), Some("Chembur"));
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn empty_route_has_no_endpoints() {
        let route = Route {
            stations: Vec::new(),
            legs: Vec::new(),
            total: Minutes::ZERO,
        };
        assert_eq!(route.origin(), None);
        assert_eq!(route.destination(), None);
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn outcome_accessors() {
        let found = RouteOutcome::Found(Route::from_legs("A", vec![]));
        assert!(found.is_found());
        assert_eq!(found.route().and_then(Route::origin), Some("A"));
        assert!(found.into_route().is_some());

        let none = RouteOutcome::NoPathFound;
        assert!(!none.is_found());
        assert!(none.route().is_none());
        assert!(none.into_route().is_none());
    }
}
