//! Inclusive range representation for search settings.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Closed range `[start, end]` used for every configurable limit.
///
/// Unlike [`RangeInclusive`], a `Bounds` with `start > end` is a legal value
/// that is simply empty; validation decides whether that is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<T> {
    start: T,
    end: T,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// Creates bounds `[start, end]`.
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> T {
        self.start
    }

    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns true if no value satisfies `start <= value <= end`.
    pub fn is_empty(&self) -> bool {
        !(self.start <= self.end)
    }

    /// Returns true if `value` ∈ `[start, end]`.
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Narrows two bounds to their common part.
    ///
    /// Returns `None` when either side is empty or they do not overlap.
    pub fn intersection(&self, other: &Bounds<T>) -> Option<Bounds<T>> {
        let start = if self.start > other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end < other.end {
            self.end
        } else {
            other.end
        };
        let narrowed = Bounds::new(start, end);
        (!narrowed.is_empty()).then_some(narrowed)
    }

    /// Converts to a standard inclusive range for iteration.
    pub fn to_range(&self) -> RangeInclusive<T> {
        self.start..=self.end
    }
}

impl<T: Display> Display for Bounds<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// =============================================================================
// Bounds Serde Support
// =============================================================================

/// Bounds travel as a two-element array `[start, end]`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Bounds<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(&self.start, &self.end), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Bounds<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (start, end) = <(T, T) as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self { start, end })
    }
}
