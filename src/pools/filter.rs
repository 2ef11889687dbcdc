//! Bucket filtering rules.

use std::collections::BTreeSet;

use super::SumBucket;
use crate::config::Bounds;

/// Returns true if the bucket total lies within `range`.
pub fn sum_in_range(bucket: &SumBucket, range: &Bounds<u64>) -> bool {
    range.contains(bucket.sum())
}

/// Returns true if the bucket holds at least `min_pools` pools.
pub fn has_enough_pools(bucket: &SumBucket, min_pools: usize) -> bool {
    bucket.len() >= min_pools
}

/// Returns true if the durations used across the bucket's pools are exactly
/// the distinct durations of `durations`.
pub fn uses_every_duration(bucket: &SumBucket, durations: &[u32]) -> bool {
    let available: BTreeSet<u32> = durations.iter().copied().collect();
    bucket.used_durations() == available
}
