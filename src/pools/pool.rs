//! Canonical multiset representation of a pool.

use std::fmt::Display;
use std::ops::Deref;

use crate::durations::write_tuple;

/// A multiset of durations, stored as a sorted vector.
///
/// Sorting makes the representation canonical, so two pools holding the
/// same durations compare, hash and order identically regardless of how
/// they were assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pool(Vec<u32>);

impl Pool {
    /// Creates a pool from durations in any order.
    pub fn new(mut values: Vec<u32>) -> Self {
        values.sort_unstable();
        Self(values)
    }

    /// Wraps a `Vec` that is **already sorted** without re-sorting.
    pub(crate) fn from_sorted_unchecked(values: Vec<u32>) -> Self {
        debug_assert!(
            values.windows(2).all(|pair| pair[0] <= pair[1]),
            "Pool::from_sorted_unchecked called with unsorted input"
        );
        Self(values)
    }

    /// Total of all durations in the pool.
    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&value| u64::from(value)).sum()
    }

    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for Pool {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u32>> for Pool {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

impl Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_tuple(f, &self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<u32> as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_values() {
        let pool = Pool::new(vec![15, 1, 1, 1]);
        assert_eq!(pool.values(), &[1, 1, 1, 15]);
    }

    #[test]
    fn test_equal_multisets_are_equal_pools() {
        assert_eq!(Pool::new(vec![7, 2, 2, 7]), Pool::from(vec![2, 7, 7, 2]));
        assert_ne!(Pool::new(vec![2, 2, 7]), Pool::new(vec![2, 7, 7]));
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let pool = Pool::new(vec![u32::MAX, u32::MAX]);
        assert_eq!(pool.sum(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_display_as_tuple() {
        assert_eq!(Pool::new(vec![2, 4, 7, 7]).to_string(), "(2, 4, 7, 7)");
        assert_eq!(Pool::new(vec![4]).to_string(), "(4,)");
    }

    #[test]
    fn test_pools_order_lexicographically() {
        let mut pools = vec![
            Pool::new(vec![2, 2, 7, 7]),
            Pool::new(vec![1, 1, 1, 15]),
            Pool::new(vec![2, 2, 4, 10]),
        ];
        pools.sort();
        assert_eq!(pools[0], Pool::new(vec![1, 1, 1, 15]));
        assert_eq!(pools[2], Pool::new(vec![2, 2, 7, 7]));
    }
}
