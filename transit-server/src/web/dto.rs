//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Minutes;
use crate::planner::{Route, RouteLeg, RouteOutcome};

/// Request to list stations.
#[derive(Debug, Default, Deserialize)]
pub struct StationListRequest {
    /// Optional case-insensitive substring filter
    pub q: Option<String>,

    /// Maximum number of stations to return
    pub limit: Option<usize>,
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Total number of stations in the network
    pub total: usize,

    /// Matching station names, in registration order
    pub stations: Vec<String>,
}

/// A neighbouring station.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NeighborResult {
    /// Station name
    pub station: String,

    /// Travel time in minutes
    pub minutes: u128,
}

/// Response listing a station's neighbours.
#[derive(Debug, Serialize)]
pub struct NeighborsResponse {
    /// The station queried
    pub station: String,

    /// Neighbours in connection order; parallel connections are listed separately
    pub neighbors: Vec<NeighborResult>,
}

/// Request to find a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// One hop of a route.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LegResult {
    /// Station the hop starts at
    pub from: String,

    /// Station the hop ends at
    pub to: String,

    /// Travel time in minutes
    pub minutes: u128,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Whether a route exists
    pub found: bool,

    /// Stations along the route, origin and destination included
    pub stations: Vec<String>,

    /// Hops between consecutive stations
    pub legs: Vec<LegResult>,

    /// Total travel time in minutes
    pub total_minutes: Option<u128>,

    /// Human-readable total, e.g. "1 hours and 5 minutes"
    pub duration: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Conversion implementations

impl RouteResponse {
    /// Create a response from a search outcome.
    pub fn from_outcome(from: &str, to: &str, outcome: &RouteOutcome) -> Self {
        match outcome.route() {
            Some(route) => Self::from_route(from, to, route),
            None => Self {
                from: from.to_string(),
                to: to.to_string(),
                found: false,
                stations: Vec::new(),
                legs: Vec::new(),
                total_minutes: None,
                duration: None,
            },
        }
    }

    fn from_route(from: &str, to: &str, route: &Route) -> Self {
        Self {
            from: route.origin().unwrap_or(from).to_string(),
            to: route.destination().unwrap_or(to).to_string(),
            found: true,
            stations: route.stations.clone(),
            legs: route.legs.iter().map(LegResult::from_leg).collect(),
            total_minutes: Some(route.total.get()),
            duration: Some(format_duration(route.total)),
        }
    }
}

impl LegResult {
    /// Create a result from a route leg.
    pub fn from_leg(leg: &RouteLeg) -> Self {
        Self {
            from: leg.from.clone(),
            to: leg.to.clone(),
            minutes: leg.minutes.get(),
        }
    }
}

/// Format a travel time as "H hours and M minutes".
pub fn format_duration(minutes: Minutes) -> String {
    let (hours, mins) = minutes.hours_and_minutes();
    format!("{hours} hours and {mins} minutes")
}
