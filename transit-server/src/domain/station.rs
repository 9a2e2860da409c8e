//! Station handle type.

use std::fmt;

/// A dense handle for a station registered in a [`Network`].
///
/// Station names are interned when first seen, so a `StationId` is only
/// meaningful for the network that issued it. Handles are allocated in
/// registration order starting at zero.
///
/// [`Network`]: crate::network::Network
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    /// Create a handle from a raw index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the handle as an index into per-station tables.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        assert_eq!(StationId::new(0).index(), 0);
        assert_eq!(StationId::new(41).index(), 41);
    }

    #[test]
    fn ordering_follows_registration() {
        assert!(StationId::new(1) < StationId::new(2));
    }

    #[test]
    fn debug_and_display() {
        let id = StationId::new(7);
        assert_eq!(format!("{:?}", id), "StationId(7)");
        assert_eq!(format!("{}", id), "#7");
    }
}
