use std::{fmt::Display, ops::RangeInclusive};

use crate::Error;

/// The position of a key relative to an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Strictly below the lower bound.
    Smaller,
    /// Within the closed interval.
    InInterval,
    /// Strictly above the upper bound.
    Bigger,
}

impl Placement {
    /// The classification that a parent must carry for the edge to its child
    /// (classified as `self`) to cross the interval.
    pub(crate) fn opposite(self) -> Option<Self> {
        match self {
            Self::Smaller => Some(Self::Bigger),
            Self::Bigger => Some(Self::Smaller),
            Self::InInterval => None,
        }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Smaller => "smaller",
            Self::InInterval => "in interval",
            Self::Bigger => "bigger",
        };
        f.write_str(s)
    }
}

/// A closed, immutable key interval `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    /// Construct the closed interval `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `lo > hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self, Error> {
        if lo > hi {
            return Err(Error::InvalidInterval { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// The inclusive lower bound.
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// The inclusive upper bound.
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Classify `key` as below, within, or above this interval.
    pub fn classify(&self, key: i64) -> Placement {
        if key < self.lo {
            Placement::Smaller
        } else if key > self.hi {
            Placement::Bigger
        } else {
            Placement::InInterval
        }
    }

    /// Returns true if `key` lies within `[lo, hi]`.
    pub fn contains(&self, key: i64) -> bool {
        self.classify(key) == Placement::InInterval
    }
}

impl TryFrom<RangeInclusive<i64>> for Interval {
    type Error = Error;

    fn try_from(value: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        Self::new(*value.start(), *value.end())
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
