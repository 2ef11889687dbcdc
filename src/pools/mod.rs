//! Pools drawn from a duration set and grouped by total.
//!
//! For a duration set and a pool length, the analysis runs in three steps:
//!
//! 1. **Enumeration**: every multiset of `pool_length` durations drawn with
//!    repetition from the set, in lexicographic order ([`Multisets`]).
//! 2. **Grouping**: pools bucketed by total, totals kept in first-seen order
//!    ([`SumBuckets`]).
//! 3. **Filtering**: a bucket survives only if its total lies in the
//!    configured sum range, it holds at least `min_pools_per_sum` pools, and
//!    every duration of the set appears in at least one of its pools
//!    ([`filter`]).

mod analyzer;
mod buckets;
pub mod filter;
mod multisets;
mod pool;


pub use analyzer::{group_by_sum, PoolAnalyzer};
pub use buckets::{SumBucket, SumBuckets};
pub use multisets::{multiset_count, Multisets};
pub use pool::Pool;
