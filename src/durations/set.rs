//! The duration set value type.

use std::fmt::Display;
use std::ops::Deref;

use super::DurationSetError;

/// A strictly increasing sequence of positive durations.
///
/// Read access is transparent via `Deref<Target = [u32]>`. Sets are
/// immutable once built; the generator and the analyzer only ever read them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DurationSet(Vec<u32>);

impl DurationSet {
    /// Builds a set, checking that `values` is non-empty, positive and
    /// strictly increasing.
    pub fn new(values: Vec<u32>) -> Result<Self, DurationSetError> {
        if values.is_empty() {
            return Err(DurationSetError::Empty);
        }
        if values[0] == 0 {
            return Err(DurationSetError::ZeroDuration);
        }
        for (index, pair) in values.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(DurationSetError::NotStrictlyIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }
        Ok(Self(values))
    }

    /// Wraps a `Vec` that is **already strictly increasing**.
    ///
    /// In debug builds this asserts the invariant.
    pub(crate) fn from_sorted_unchecked(values: Vec<u32>) -> Self {
        debug_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "DurationSet::from_sorted_unchecked called with unordered input"
        );
        Self(values)
    }

    /// Returns the durations as a slice.
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Consumes the set, returning the underlying durations.
    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for DurationSet {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for DurationSet {
    type Error = DurationSetError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

/// Writes `values` as a parenthesized tuple, e.g. `(1, 2, 4)`.
///
/// A single value keeps a trailing comma, `(4,)`.
pub(crate) fn write_tuple(f: &mut std::fmt::Formatter<'_>, values: &[u32]) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    if values.len() == 1 {
        write!(f, ",")?;
    }
    write!(f, ")")
}

impl Display for DurationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_tuple(f, &self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DurationSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DurationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<u32> as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(values).map_err(serde::de::Error::custom)
    }
}
