//! The station graph.
//!
//! Stations are interned to [`StationId`] handles on first sight and each
//! keeps an insertion-ordered list of its connections. The list order is
//! what the route finder iterates over, so it must never be reshuffled.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Minutes, StationId};

use super::error::NetworkError;

/// One side of an undirected connection, as seen from a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// The neighbouring station.
    pub to: StationId,
    /// Travel time to the neighbour.
    pub minutes: Minutes,
}

/// A transit network: stations joined by timed, undirected connections.
///
/// Connections are stored symmetrically: recording A - B also records B - A
/// with the same travel time. Two connections between the same pair with
/// different travel times are kept side by side (e.g. a fast and a slow
/// line), but repeating an identical connection changes nothing.
///
/// # Examples
///
/// ```
/// use transit_server::network::Network;
///
/// let mut network = Network::new();
/// network.add_connection("Dadar", "Parel", 3).unwrap();
/// network.add_connection("Dadar", "Parel", 3).unwrap(); // no-op
///
/// let from_parel = network.neighbors("Parel").unwrap();
/// assert_eq!(from_parel.len(), 1);
/// assert_eq!(from_parel[0].0, "Dadar");
/// assert_eq!(from_parel[0].1.get(), 3);
///
/// assert!(network.add_connection("Dadar", "Sion", -1).is_err());
/// assert!(!network.contains("Sion"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Station names, indexed by `StationId`.
    names: Vec<String>,

    /// Name to handle lookup.
    ids: HashMap<String, StationId>,

    /// Connections per station, indexed by `StationId`.
    adjacency: Vec<Vec<Connection>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from `(start, end, minutes)` triples, in order.
    ///
    /// Stops at the first triple with a negative travel time.
    pub fn from_connections<I, S>(connections: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (S, S, i64)>,
        S: AsRef<str>,
    {
        let mut network = Self::new();
        for (start, end, minutes) in connections {
            network.add_connection(start.as_ref(), end.as_ref(), minutes)?;
        }
        Ok(network)
    }

    /// Record a connection between two stations.
    ///
    /// Unseen stations are registered, `start` before `end`. The travel
    /// time is validated before anything is touched, so a rejected call
    /// leaves the network exactly as it was.
    pub fn add_connection(
        &mut self,
        start: &str,
        end: &str,
        minutes: i64,
    ) -> Result<(), NetworkError> {
        let minutes = Minutes::new(minutes).map_err(|source| NetworkError::InvalidWeight {
            start: start.to_string(),
            end: end.to_string(),
            source,
        })?;

        let a = self.register(start);
        let b = self.register(end);

        if self.has_connection(a, b, minutes) {
            trace!(start, end, %minutes, "connection already recorded");
            return Ok(());
        }

        self.adjacency[a.index()].push(Connection { to: b, minutes });
        if a != b {
            self.adjacency[b.index()].push(Connection { to: a, minutes });
        }
        Ok(())
    }

    /// Register a station with no connections.
    ///
    /// Returns the existing handle if the name is already known.
    pub fn add_station(&mut self, name: &str) -> StationId {
        self.register(name)
    }

    /// Neighbours of a station with their travel times, in insertion order.
    pub fn neighbors(&self, station: &str) -> Result<Vec<(&str, Minutes)>, NetworkError> {
        let id = self.require(station)?;
        Ok(self
            .connections(id)
            .iter()
            .map(|c| (self.station_name(c.to), c.minutes))
            .collect())
    }

    /// Names of a station's neighbours, in insertion order.
    ///
    /// A neighbour reached by parallel connections appears once per connection.
    pub fn neighbor_names(&self, station: &str) -> Result<Vec<&str>, NetworkError> {
        let id = self.require(station)?;
        Ok(self
            .connections(id)
            .iter()
            .map(|c| self.station_name(c.to))
            .collect())
    }

    /// All station names, in registration order.
    pub fn stations(&self) -> &[String] {
        &self.names
    }

    /// All station handles, in registration order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        (0..self.names.len()).map(StationId::new)
    }

    /// Check whether a station is registered.
    pub fn contains(&self, station: &str) -> bool {
        self.ids.contains_key(station)
    }

    /// Look up the handle for a station name.
    pub fn station_id(&self, station: &str) -> Option<StationId> {
        self.ids.get(station).copied()
    }

    /// Look up the handle for a station name, failing if it is unknown.
    pub fn require(&self, station: &str) -> Result<StationId, NetworkError> {
        self.station_id(station)
            .ok_or_else(|| NetworkError::UnknownStation(station.to_string()))
    }

    /// Name of a station.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn station_name(&self, id: StationId) -> &str {
        &self.names[id.index()]
    }

    /// Connections of a station, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn connections(&self, id: StationId) -> &[Connection] {
        &self.adjacency[id.index()]
    }

    /// The fastest of the connections joining two stations, if any.
    pub fn min_minutes_between(&self, a: StationId, b: StationId) -> Option<Minutes> {
        self.connections(a)
            .iter()
            .filter(|c| c.to == b)
            .map(|c| c.minutes)
            .min()
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no station is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of undirected connections (A - B counted once).
    pub fn connection_count(&self) -> usize {
        self.undirected_connections().count()
    }

    /// Each undirected connection once, as `(start, end, minutes)`.
    ///
    /// A connection is reported from the endpoint registered first.
    pub fn undirected_connections(
        &self,
    ) -> impl Iterator<Item = (StationId, StationId, Minutes)> + '_ {
        self.station_ids().flat_map(move |from| {
            self.connections(from)
                .iter()
                .filter(move |c| c.to >= from)
                .map(move |c| (from, c.to, c.minutes))
        })
    }

    fn register(&mut self, name: &str) -> StationId {
        if let Some(id) = self.station_id(name) {
            return id;
        }
        let id = StationId::new(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    fn has_connection(&self, a: StationId, b: StationId, minutes: Minutes) -> bool {
        let wanted_from_a = Connection { to: b, minutes };
        let wanted_from_b = Connection { to: a, minutes };
        self.connections(a).contains(&wanted_from_a)
            || self.connections(b).contains(&wanted_from_b)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn connection_list() -> impl Strategy<Value = Vec<(u8, u8, i64)>> {
        prop::collection::vec((0u8..8, 0u8..8, 0i64..20), 0..40)
    }

    fn build(connections: &[(u8, u8, i64)]) -> Network {
        let mut network = Network::new();
        for (a, b, m) in connections {
            network
                .add_connection(&format!("S{a}"), &format!("S{b}"), *m)
                .unwrap();
        }
        network
    }

    proptest! {
        /// Every recorded connection has its mirror image
        #[test]
        fn adjacency_is_symmetric(connections in connection_list()) {
            let network = build(&connections);
            for v in network.stations() {
                for (u, w) in network.neighbors(v).unwrap() {
                    let back = network.neighbors(u).unwrap();
                    prop_assert!(back.contains(&(v.as_str(), w)));
                }
            }
        }

        /// Every inserted connection can be found from both ends
        #[test]
        fn inserted_connections_visible(connections in connection_list()) {
            let network = build(&connections);
            for (a, b, m) in &connections {
                let (a, b) = (format!("S{a}"), format!("S{b}"));
                let m = Minutes::new(*m).unwrap();
                prop_assert!(network.neighbors(&a).unwrap().contains(&(b.as_str(), m)));
                prop_assert!(network.neighbors(&b).unwrap().contains(&(a.as_str(), m)));
            }
        }

        /// Replaying the same insertions changes nothing
        #[test]
        fn replay_is_idempotent(connections in connection_list()) {
            let mut network = build(&connections);
            let before = network.clone();
            for (a, b, m) in &connections {
                network.add_connection(&format!("S{b}"), &format!("S{a}"), *m).unwrap();
            }
            for v in before.stations() {
                prop_assert_eq!(before.neighbors(v).unwrap(), network.neighbors(v).unwrap());
            }
            prop_assert_eq!(before.stations(), network.stations());
        }

        /// No (neighbour, weight) pair is ever listed twice
        #[test]
        fn no_duplicate_entries(connections in connection_list()) {
            let network = build(&connections);
            for id in network.station_ids() {
                let list = network.connections(id);
                for (i, c) in list.iter().enumerate() {
                    prop_assert!(!list[i + 1..].contains(c));
                }
            }
        }
    }
}
