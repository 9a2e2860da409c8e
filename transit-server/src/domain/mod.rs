//! Domain types for the transit route planner.
//!
//! Value types that enforce their invariants at construction time, so the
//! graph store and the route finder can trust them.

mod minutes;
mod station;

pub use minutes::{InvalidMinutes, Minutes};
pub use station::StationId;
