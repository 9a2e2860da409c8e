//! Route finder.
//!
//! Answers "what is the quickest way from this station to that one?" over a
//! built [`Network`](crate::network::Network). The search settles stations
//! cheapest-first from the origin and reconstructs the route from parent
//! links once the destination is settled.

mod config;
mod route;
mod search;


pub use config::SearchConfig;
pub use route::{Route, RouteLeg, RouteOutcome};
pub use search::{RouteFinder, SearchError, SearchResult};
