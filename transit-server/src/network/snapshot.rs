//! JSON snapshots of a network.
//!
//! A snapshot lists every station and every undirected connection once.
//! Loading replays the connections through [`Network::add_connection`], so a
//! snapshot is held to the same rules as hand-built networks.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SnapshotError;
use super::graph::Network;

/// Serializable form of a [`Network`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Station names in registration order.
    pub stations: Vec<String>,

    /// Each undirected connection once.
    pub connections: Vec<SnapshotConnection>,
}

/// One undirected connection in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConnection {
    pub from: String,
    pub to: String,
    pub minutes: i64,
}

impl Network {
    /// Capture the network as a snapshot.
    pub fn to_snapshot(&self) -> NetworkSnapshot {
        let connections = self
            .undirected_connections()
            .map(|(from, to, minutes)| SnapshotConnection {
                from: self.station_name(from).to_string(),
                to: self.station_name(to).to_string(),
                minutes: i64::try_from(minutes.get()).unwrap_or(i64::MAX),
            })
            .collect();

        NetworkSnapshot {
            stations: self.stations().to_vec(),
            connections,
        }
    }

    /// Rebuild a network from a snapshot.
    ///
    /// Stations are registered in snapshot order before any connection is
    /// replayed, so stations without connections survive the round-trip.
    pub fn from_snapshot(snapshot: &NetworkSnapshot) -> Result<Self, SnapshotError> {
        let mut network = Network::new();
        for station in &snapshot.stations {
            network.add_station(station);
        }
        for c in &snapshot.connections {
            network.add_connection(&c.from, &c.to, c.minutes)?;
        }
        Ok(network)
    }

    /// Write the network to a JSON file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.to_snapshot())?;
        std::fs::write(path, json)?;

        debug!(
            path = %path.display(),
            stations = self.len(),
            connections = self.connection_count(),
            "saved network snapshot"
        );
        Ok(())
    }

    /// Read a network from a JSON file.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let snapshot: NetworkSnapshot = serde_json::from_str(&contents)?;
        let network = Network::from_snapshot(&snapshot)?;

        debug!(
            path = %path.display(),
            stations = network.len(),
            connections = network.connection_count(),
            "loaded network snapshot"
        );
        Ok(network)
    }
}
