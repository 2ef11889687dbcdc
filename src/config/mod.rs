//! Search configuration.
//!
//! A [`SearchConfig`] is injected into every stage of the search. It is
//! validated once, up front, by whichever stage consumes it; after that the
//! search itself never fails.

mod bounds;
mod error;

pub use bounds::Bounds;
pub use error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings controlling which duration sets and pools are searched.
///
/// `Default` reproduces the settings the searcher was originally tuned with:
/// durations 4..=25 spaced by at least 2 and by a ratio in `[1.5, 4.0]`,
/// sets of 3..=20 durations starting with `[1, 2]`, pools of 4 durations
/// whose sums lie in 3..=20 with at least 3 pools sharing each sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SearchConfig {
    /// Values allowed for every duration appended after the forced prefix.
    pub duration_range: Bounds<u32>,
    /// Smallest gap between consecutive durations.
    pub min_diff: u32,
    /// Next duration must be at least `floor(last * min_mult)`.
    pub min_mult: f64,
    /// Next duration must be at most `ceil(last * max_mult)`.
    pub max_mult: f64,
    /// Number of durations in a set.
    pub set_size_range: Bounds<usize>,
    /// Lowest durations every set starts with.
    pub forced_prefix: Vec<u32>,
    /// Number of durations in a pool.
    pub pool_length_range: Bounds<usize>,
    /// Acceptable pool totals.
    pub pool_sum_range: Bounds<u64>,
    /// Pools needed with the same total for that total to be kept.
    pub min_pools_per_sum: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            duration_range: Bounds::new(4, 25),
            min_diff: 2,
            min_mult: 1.5,
            max_mult: 4.0,
            set_size_range: Bounds::new(3, 20),
            forced_prefix: vec![1, 2],
            pool_length_range: Bounds::new(4, 4),
            pool_sum_range: Bounds::new(3, 20),
            min_pools_per_sum: 3,
        }
    }
}

impl SearchConfig {
    /// Checks every invariant the search relies on.
    ///
    /// Set sizes below the forced prefix length are not an error as long as
    /// at least the largest size can hold the prefix; such sizes are skipped
    /// during generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = self.duration_range;
        if durations.is_empty() {
            return Err(ConfigError::EmptyDurationRange {
                min: durations.start(),
                max: durations.end(),
            });
        }
        // Without a prefix the range start becomes the first duration.
        let zero_first = self.forced_prefix.is_empty() && durations.start() == 0;
        if zero_first || self.forced_prefix.contains(&0) {
            return Err(ConfigError::ZeroDuration);
        }

        for mult in [self.min_mult, self.max_mult] {
            if !mult.is_finite() || mult < 0.0 {
                return Err(ConfigError::InvalidMultiplier(mult));
            }
        }
        if self.min_mult > self.max_mult {
            return Err(ConfigError::InvertedMultipliers {
                min: self.min_mult,
                max: self.max_mult,
            });
        }

        let sizes = self.set_size_range;
        if sizes.is_empty() {
            return Err(ConfigError::EmptySetSizeRange {
                min: sizes.start(),
                max: sizes.end(),
            });
        }
        if self.forced_prefix.len() > sizes.end() {
            return Err(ConfigError::ForcedPrefixTooLong {
                len: self.forced_prefix.len(),
                max_set_size: sizes.end(),
            });
        }
        let prefix = self.sorted_prefix();
        if let Some(pair) = prefix.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ConfigError::DuplicateForcedDuration(pair[0]));
        }

        let lengths = self.pool_length_range;
        if lengths.is_empty() {
            return Err(ConfigError::EmptyPoolLengthRange {
                min: lengths.start(),
                max: lengths.end(),
            });
        }
        if lengths.start() == 0 {
            return Err(ConfigError::ZeroPoolLength);
        }

        let sums = self.pool_sum_range;
        if sums.is_empty() {
            return Err(ConfigError::EmptyPoolSumRange {
                min: sums.start(),
                max: sums.end(),
            });
        }

        Ok(())
    }

    /// Forced prefix in ascending order.
    pub fn sorted_prefix(&self) -> Vec<u32> {
        let mut prefix = self.forced_prefix.clone();
        prefix.sort_unstable();
        prefix
    }
}
