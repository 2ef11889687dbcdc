//! Duration sets and their generation.
//!
//! A duration set is a strictly increasing sequence of positive durations
//! beginning with the configured forced prefix. Every further duration is
//! bounded relative to the one before it:
//!
//! - it lies within the configured duration range,
//! - it exceeds the previous one by at least `min_diff`, and by at least 1,
//! - it is at least `floor(previous * min_mult)`,
//! - it is at most `ceil(previous * max_mult)`.
//!
//! [`SetGenerator`] walks all such sets lazily, size by size, pruning any
//! branch whose next position admits no value.
//!
//! # Module Structure
//!
//! - [`admissible`] - Range of values allowed for the next duration
//! - `generator` - Explicit-stack backtracking over set sizes and positions
//! - `set` - The [`DurationSet`] value type

pub mod admissible;
mod error;
mod generator;
mod set;

pub use admissible::next_duration_bounds;
pub use error::DurationSetError;
pub use generator::{DurationSets, SetGenerator};
pub use set::DurationSet;

pub(crate) use set::write_tuple;
