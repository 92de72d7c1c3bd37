//! Section distance type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing a zero distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: must be greater than zero")]
pub struct InvalidDistance;

/// The length of a section, always strictly positive.
///
/// # Examples
///
/// ```
/// use subway_path::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance);
        }
        Ok(Distance(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Adds `other`, returning `None` if the sum does not fit.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }

    /// Subtracts `other`, returning `None` unless the result stays positive.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .filter(|&d| d > 0)
            .map(Distance)
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Distance::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(d: Distance) -> u32 {
        d.0
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Splitting then re-adding gives back the original distance
        #[test]
        fn sub_then_add(whole in 2u32..10_000, part in 1u32..10_000) {
            prop_assume!(part < whole);
            let whole = Distance::new(whole).unwrap();
            let part = Distance::new(part).unwrap();
            let rest = whole.checked_sub(part).unwrap();
            prop_assert_eq!(rest.checked_add(part), Some(whole));
        }

        /// Any positive value constructs
        #[test]
        fn positive_always_valid(v in 1u32..) {
            prop_assert_eq!(Distance::new(v).unwrap().get(), v);
        }
    }
}
