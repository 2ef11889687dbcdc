//! Sum-grouped pool analysis for a single duration set.

use log::trace;

use super::filter::{has_enough_pools, sum_in_range, uses_every_duration};
use super::{multiset_count, Multisets, SumBucket, SumBuckets};
use crate::config::{Bounds, ConfigError, SearchConfig};
use crate::durations::DurationSet;

/// Groups every pool of a given length by total and keeps the totals that
/// pass all filters.
#[derive(Debug, Clone)]
pub struct PoolAnalyzer {
    sum_range: Bounds<u64>,
    min_pools_per_sum: usize,
}

impl PoolAnalyzer {
    /// Validates `config` and takes its pool thresholds.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: &SearchConfig) -> Self {
        Self {
            sum_range: config.pool_sum_range,
            min_pools_per_sum: config.min_pools_per_sum,
        }
    }

    /// Returns the filtered buckets of all `pool_length`-sized pools drawn
    /// from `set`. An empty result is valid.
    pub fn analyze(
        &self,
        set: &DurationSet,
        pool_length: usize,
    ) -> Result<SumBuckets, ConfigError> {
        if pool_length == 0 {
            return Err(ConfigError::ZeroPoolLength);
        }
        Ok(self.analyze_unchecked(set, pool_length).0)
    }

    /// Like [`PoolAnalyzer::analyze`] for a length already known to be
    /// positive; also returns how many candidate pools were enumerated.
    pub(crate) fn analyze_unchecked(
        &self,
        set: &DurationSet,
        pool_length: usize,
    ) -> (SumBuckets, usize) {
        let mut buckets = group_by_sum(set, pool_length);
        let candidates = buckets.pool_count();
        debug_assert_eq!(
            multiset_count(set.len(), pool_length),
            Some(candidates as u128)
        );
        let grouped = buckets.len();

        buckets.retain(|bucket| self.keeps(bucket, set));

        trace!(
            "set {} with pool length {}: {} pools in {} sums, {} sums kept",
            set,
            pool_length,
            candidates,
            grouped,
            buckets.len()
        );
        (buckets, candidates)
    }

    /// Returns true if `bucket` passes the sum-range, pool-count and coverage
    /// filters for `set`.
    pub fn keeps(&self, bucket: &SumBucket, set: &DurationSet) -> bool {
        sum_in_range(bucket, &self.sum_range)
            && has_enough_pools(bucket, self.min_pools_per_sum)
            && uses_every_duration(bucket, set)
    }
}

/// Enumerates every multiset of `pool_length` durations from `durations`
/// and groups them by total, without filtering.
pub fn group_by_sum(durations: &[u32], pool_length: usize) -> SumBuckets {
    Multisets::new(durations, pool_length).collect()
}
