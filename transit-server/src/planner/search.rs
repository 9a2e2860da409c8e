//! Least-time route search.
//!
//! Best-first search over the network graph, settling stations in order of
//! their cumulative travel time from the origin. There is no distance
//! estimate, so the search is exact-cost Dijkstra.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{Minutes, StationId};
use crate::network::Network;

use super::config::SearchConfig;
use super::route::{Route, RouteLeg, RouteOutcome};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The origin or destination is not in the network
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The query settled more stations than allowed
    #[error("search gave up after settling {limit} stations")]
    ExpansionLimit { limit: usize },
}

/// Result of a route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The route, or the fact that there is none.
    pub outcome: RouteOutcome,

    /// Number of stations settled during search.
    pub stations_settled: usize,
}

/// Frontier entry. Ordered by cost, then by the order entries were pushed,
/// so among equally cheap stations the one discovered first is settled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    cost: Minutes,
    seq: u64,
    station: StationId,
}

/// Per-query search state.
///
/// Indexed by `StationId`. `parent` also carries the travel time of the hop
/// used to reach the station; the origin is its own parent.
struct SearchState {
    g: Vec<Option<Minutes>>,
    parent: Vec<Option<(StationId, Minutes)>>,
    finalized: Vec<bool>,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl SearchState {
    fn new(station_count: usize, start: StationId) -> Self {
        let mut state = Self {
            g: vec![None; station_count],
            parent: vec![None; station_count],
            finalized: vec![false; station_count],
            frontier: BinaryHeap::new(),
            next_seq: 0,
        };
        state.parent[start.index()] = Some((start, Minutes::ZERO));
        state.set_cost(start, Minutes::ZERO);
        state
    }

    /// Record a new best cost and (re)enter the station into the frontier.
    ///
    /// Older frontier entries for the station become stale and are skipped
    /// when popped. A finalized station is reopened.
    fn set_cost(&mut self, station: StationId, cost: Minutes) {
        let idx = station.index();
        self.g[idx] = Some(cost);
        self.finalized[idx] = false;
        self.frontier.push(Reverse(FrontierEntry {
            cost,
            seq: self.next_seq,
            station,
        }));
        self.next_seq += 1;
    }

    /// Pop the cheapest live frontier entry.
    fn pop(&mut self) -> Option<(StationId, Minutes)> {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            let idx = entry.station.index();
            if self.finalized[idx] || self.g[idx] != Some(entry.cost) {
                continue;
            }
            return Some((entry.station, entry.cost));
        }
        None
    }
}

/// Route finder over a network.
///
/// Holds no per-query state, so one finder can answer any number of queries
/// and many finders can share one network.
pub struct RouteFinder<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> RouteFinder<'a> {
    /// Create a new route finder.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find a least-time route from `start` to `end`.
    ///
    /// A station queried against itself is a zero-minute route of one
    /// station. When several routes tie on total time, the one found is
    /// fixed by the network's connection order.
    pub fn find(&self, start: &str, end: &str) -> Result<SearchResult, SearchError> {
        let start_id = self.lookup(start)?;
        let end_id = self.lookup(end)?;

        let mut state = SearchState::new(self.network.len(), start_id);
        let mut stations_settled = 0;

        while let Some((n, cost)) = state.pop() {
            stations_settled += 1;
            if stations_settled > self.config.max_expansions {
                debug!(start, end, limit = self.config.max_expansions, "search limit hit");
                return Err(SearchError::ExpansionLimit {
                    limit: self.config.max_expansions,
                });
            }

            if n == end_id {
                let route = self.reconstruct(&state, end_id);
                debug_assert_eq!(Some(route.total), state.g[end_id.index()]);
                debug!(
                    start,
                    end,
                    total = %route.total,
                    hops = route.hop_count(),
                    stations_settled,
                    "route found"
                );
                return Ok(SearchResult {
                    outcome: RouteOutcome::Found(route),
                    stations_settled,
                });
            }

            for connection in self.network.connections(n) {
                let candidate = cost + connection.minutes;
                let m = connection.to;
                let improves = match state.g[m.index()] {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves {
                    trace!(
                        station = self.network.station_name(m),
                        via = self.network.station_name(n),
                        %candidate,
                        "relaxed"
                    );
                    state.parent[m.index()] = Some((n, connection.minutes));
                    state.set_cost(m, candidate);
                }
            }

            state.finalized[n.index()] = true;
        }

        debug!(start, end, stations_settled, "no path");
        Ok(SearchResult {
            outcome: RouteOutcome::NoPathFound,
            stations_settled,
        })
    }

    fn lookup(&self, station: &str) -> Result<StationId, SearchError> {
        self.network
            .station_id(station)
            .ok_or_else(|| SearchError::UnknownStation(station.to_string()))
    }

    /// Follow parent links back from `end` to the origin.
    fn reconstruct(&self, state: &SearchState, end: StationId) -> Route {
        let mut hops = Vec::new();
        let mut current = end;
        while let Some((prev, minutes)) = state.parent[current.index()] {
            if prev == current {
                break;
            }
            hops.push(RouteLeg {
                from: self.network.station_name(prev).to_string(),
                to: self.network.station_name(current).to_string(),
                minutes,
            });
            current = prev;
        }
        hops.reverse();

        Route::from_legs(self.network.station_name(current), hops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(connections: &[(&str, &str, i64)]) -> Network {
        Network::from_connections(connections.iter().copied()).unwrap()
    }

    fn find(network: &Network, start: &str, end: &str) -> Result<SearchResult, SearchError> {
        let config = SearchConfig::default();
        RouteFinder::new(network, &config).find(start, end)
    }

    fn route(network: &Network, start: &str, end: &str) -> Route {
        find(network, start, end)
            .unwrap()
            .outcome
            .into_route()
            .expect("expected a route")
    }

    #[test]
    fn shortcut_beats_longer_line() {
        let net = network(&[("A", "B", 3), ("B", "C", 4), ("C", "D", 2), ("A", "D", 5)]);

        let r = route(&net, "A", "D");
        assert_eq!(r.stations, vec!["A", "D"]);
        assert_eq!(r.total.get(), 5);
    }

    #[test]
    fn line_beats_slow_shortcut() {
        let net = network(&[("A", "B", 3), ("B", "C", 4), ("C", "D", 2), ("A", "D", 10)]);

        let r = route(&net, "A", "D");
        assert_eq!(r.stations, vec!["A", "B", "C", "D"]);
        assert_eq!(r.total.get(), 9);
        assert_eq!(r.legs.len(), 3);
        assert_eq!(r.legs[1].from, "B");
        assert_eq!(r.legs[1].to, "C");
        assert_eq!(r.legs[1].minutes.get(), 4);
    }

    #[test]
    fn route_is_reversible() {
        let net = network(&[("A", "B", 3), ("B", "C", 4), ("C", "D", 2), ("A", "D", 10)]);

        let r = route(&net, "D", "A");
        assert_eq!(r.stations, vec!["D", "C", "B", "A"]);
        assert_eq!(r.total.get(), 9);
    }

    #[test]
    fn station_to_itself() {
        let net = network(&[("A", "B", 3)]);

        let result = find(&net, "B", "B").unwrap();
        let r = result.outcome.into_route().unwrap();
        assert_eq!(r.stations, vec!["B"]);
        assert_eq!(r.total, Minutes::ZERO);
        assert!(r.legs.is_empty());
        assert_eq!(result.stations_settled, 1);
    }

    #[test]
    fn isolated_station_to_itself() {
        let mut net = Network::new();
        net.add_station("Versova");

        let r = route(&net, "Versova", "Versova");
        assert_eq!(r.stations, vec!["Versova"]);
    }

    #[test]
    fn disconnected_stations() {
        let net = network(&[("A", "B", 3), ("C", "D", 4)]);

        let result = find(&net, "A", "D").unwrap();
        assert_eq!(result.outcome, RouteOutcome::NoPathFound);
        // Everything reachable from A was settled before giving up
        assert_eq!(result.stations_settled, 2);
    }

    #[test]
    fn unknown_stations() {
        let net = network(&[("A", "B", 3)]);

        assert_eq!(
            find(&net, "Atlantis", "B").unwrap_err(),
            SearchError::UnknownStation("Atlantis".into())
        );
        assert_eq!(
            find(&net, "A", "Atlantis").unwrap_err(),
            SearchError::UnknownStation("Atlantis".into())
        );
    }

    #[test]
    fn parallel_connections_use_the_fastest() {
        let net = network(&[("A", "B", 7), ("A", "B", 5), ("B", "C", 1)]);

        let r = route(&net, "A", "C");
        assert_eq!(r.stations, vec!["A", "B", "C"]);
        assert_eq!(r.legs[0].minutes.get(), 5);
        assert_eq!(r.total.get(), 6);
    }

    #[test]
    fn many_cheap_hops_beat_one_expensive_hop() {
        // A - E directly costs 10; the chain costs 4 but is discovered later
        let net = network(&[
            ("A", "E", 10),
            ("A", "B", 1),
            ("B", "C", 1),
            ("C", "D", 1),
            ("D", "E", 1),
        ]);

        let r = route(&net, "A", "E");
        assert_eq!(r.stations, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(r.total.get(), 4);
    }

    #[test]
    fn huge_weights_keep_the_cheaper_route() {
        // Both routes cost more than u64::MAX minutes in total
        let max = i64::MAX;
        let net = network(&[
            ("A", "P", max),
            ("P", "Q", max),
            ("Q", "D", 1000),
            ("A", "X", max),
            ("X", "Y", max),
            ("Y", "D", 2),
        ]);

        let r = route(&net, "A", "D");
        assert_eq!(r.stations, vec!["A", "X", "Y", "D"]);
        assert_eq!(r.total.get(), 2 * max as u128 + 2);
        assert_eq!(r.legs.iter().map(|l| l.minutes).sum::<Minutes>(), r.total);
    }

    #[test]
    fn zero_minute_connections() {
        let net = network(&[("Dadar", "Dadar East", 0), ("Dadar East", "Wadala Bridge", 3)]);

        let r = route(&net, "Dadar", "Wadala Bridge");
        assert_eq!(r.stations, vec!["Dadar", "Dadar East", "Wadala Bridge"]);
        assert_eq!(r.total.get(), 3);
    }

    #[test]
    fn ties_resolve_by_discovery_order() {
        // Two equal-cost routes A-B-D and A-C-D; B is discovered first
        let net = network(&[("A", "B", 2), ("A", "C", 2), ("B", "D", 2), ("C", "D", 2)]);
        for _ in 0..10 {
            assert_eq!(route(&net, "A", "D").stations, vec!["A", "B", "D"]);
        }

        // Same graph with the connections to C listed first
        let net = network(&[("A", "C", 2), ("A", "B", 2), ("C", "D", 2), ("B", "D", 2)]);
        assert_eq!(route(&net, "A", "D").stations, vec!["A", "C", "D"]);
    }

    #[test]
    fn expansion_limit() {
        let net = network(&[("A", "B", 1), ("B", "C", 1)]);
        let config = SearchConfig::new(1);

        let err = RouteFinder::new(&net, &config).find("A", "C").unwrap_err();
        assert_eq!(err, SearchError::ExpansionLimit { limit: 1 });
        assert_eq!(err.to_string(), "search gave up after settling 1 stations");
    }

    #[test]
    fn finder_is_reusable() {
        let net = network(&[("A", "B", 3), ("B", "C", 4)]);
        let config = SearchConfig::default();
        let finder = RouteFinder::new(&net, &config);

        let first = finder.find("A", "C").unwrap().outcome;
        let second = finder.find("A", "C").unwrap().outcome;
        assert_eq!(first, second);
        assert_eq!(finder.find("C", "A").unwrap().outcome.route().unwrap().total.get(), 7);
    }

    #[test]
    fn search_error_display() {
        assert_eq!(
            SearchError::UnknownStation("X".into()).to_string(),
            "unknown station: X"
        );
    }
}
