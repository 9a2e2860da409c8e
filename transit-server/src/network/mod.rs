//! The transit network graph store.
//!
//! Holds stations and the timed connections between them, and answers
//! neighbour queries for the route finder. A network is built once, either
//! from the built-in seed or from a JSON snapshot, and is read-only after.

mod error;
mod graph;
pub mod seed;
mod snapshot;

pub use error::{NetworkError, SnapshotError};
pub use graph::{Connection, Network};
pub use snapshot::{NetworkSnapshot, SnapshotConnection};
