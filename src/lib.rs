//! duration-pools - search for balanced action duration sets
//!
//! Finds sets of integer durations from which several distinct fixed-size
//! pools share the same total, so that drawing any pool at random costs the
//! same overall time and the same number of actions.
//!
//! The search runs in two lazily interleaved stages:
//!
//! 1. [`durations::SetGenerator`] enumerates every strictly increasing set
//!    that starts with the forced prefix and respects the spacing and ratio
//!    limits of the [`config::SearchConfig`].
//! 2. [`pools::PoolAnalyzer`] enumerates every pool of a given length from a
//!    set, groups the pools by total and keeps the totals that are in range,
//!    shared by enough pools, and use every duration of the set.
//!
//! [`search::DurationSearch`] drives both stages over all configured pool
//! lengths and yields a [`search::SearchRecord`] for each qualifying pair.
//!
//! # Example
//!
//! ```
//! use duration_pools::{DurationSearch, SearchConfig};
//!
//! let search = DurationSearch::new(SearchConfig::default()).unwrap();
//! let record = search
//!     .records()
//!     .find(|record| record.set.values() == [1, 2, 4, 7, 10, 15])
//!     .unwrap();
//! assert_eq!(record.pools.sums().collect::<Vec<_>>(), vec![18, 19, 20]);
//! ```

pub mod config;
pub mod durations;
pub mod pools;
pub mod search;

pub use config::{Bounds, ConfigError, SearchConfig};
pub use durations::{DurationSet, SetGenerator};
pub use pools::{Pool, PoolAnalyzer, SumBucket, SumBuckets};
pub use search::{DurationSearch, RecordError, SearchRecord, SearchStats};
