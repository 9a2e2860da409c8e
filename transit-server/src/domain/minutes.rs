//! Travel time in whole minutes.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Error returned when a travel time is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel time {value}: must be a non-negative number of minutes")]
pub struct InvalidMinutes {
    value: i64,
}

impl InvalidMinutes {
    /// The rejected value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// A non-negative travel time in minutes.
///
/// Connection weights and route totals are both `Minutes`. Weights come
/// from `i64` input, so a sum over any simple path fits in the `u128`
/// representation without loss. Addition saturates rather than wrapping.
///
/// # Examples
///
/// ```
/// use transit_server::domain::Minutes;
///
/// let five = Minutes::new(5).unwrap();
/// assert_eq!(five.get(), 5);
///
/// // Negative travel times are rejected
/// assert!(Minutes::new(-1).is_err());
///
/// assert_eq!((five + Minutes::new(70).unwrap()).hours_and_minutes(), (1, 15));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(u128);

impl Minutes {
    /// Zero minutes.
    pub const ZERO: Minutes = Minutes(0);

    /// Validate a raw minute count.
    pub fn new(value: i64) -> Result<Self, InvalidMinutes> {
        u128::try_from(value)
            .map(Self)
            .map_err(|_| InvalidMinutes { value })
    }

    /// Returns the number of minutes.
    pub fn get(self) -> u128 {
        self.0
    }

    /// Split into whole hours and the remaining minutes.
    pub fn hours_and_minutes(self) -> (u128, u128) {
        (self.0 / 60, self.0 % 60)
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Minutes) -> Self::Output {
        Minutes(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Self {
        iter.fold(Minutes::ZERO, Add::add)
    }
}

impl fmt::Debug for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minutes({})", self.0)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
