//! Network error types.

use crate::domain::InvalidMinutes;

/// Errors raised by the graph store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection was given a negative travel time
    #[error("invalid weight for connection {start} - {end}: {source}")]
    InvalidWeight {
        start: String,
        end: String,
        #[source]
        source: InvalidMinutes,
    },

    /// A station name that was never registered
    #[error("unknown station: {0}")]
    UnknownStation(String),
}

/// Errors that can occur when reading or writing a network snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON for a network
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot describes an invalid network
    #[error("invalid snapshot: {0}")]
    Network(#[from] NetworkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Minutes;

    #[test]
    fn error_display() {
        let err = NetworkError::InvalidWeight {
            start: "Dadar".into(),
            end: "Parel".into(),
            source: Minutes::new(-2).unwrap_err(),
        };
        assert_eq!(
            err.to_string(),
            "invalid weight for connection Dadar - Parel: invalid travel time -2: must be a non-negative number of minutes"
        );

        let err = NetworkError::UnknownStation("Atlantis".into());
        assert_eq!(err.to_string(), "unknown station: Atlantis");

        let err = SnapshotError::from(NetworkError::UnknownStation("X".into()));
        assert_eq!(err.to_string(), "invalid snapshot: unknown station: X");
    }
}
