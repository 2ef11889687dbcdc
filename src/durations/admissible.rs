//! Admissible range for the next duration of a partially built set.

use crate::config::{Bounds, SearchConfig};

/// Returns the values the duration following `last` may take.
///
/// With no previous duration the whole configured duration range applies.
/// Otherwise the range is narrowed to
/// `[max(last + min_diff, floor(last * min_mult)), ceil(last * max_mult)]`,
/// and never starts below `last + 1`, so sets stay strictly increasing even
/// with a `min_diff` of 0. Returns `None` when nothing fits, which prunes
/// the branch.
pub fn next_duration_bounds(last: Option<u32>, config: &SearchConfig) -> Option<Bounds<u32>> {
    let durations = config.duration_range;
    let Some(last) = last else {
        return (!durations.is_empty()).then_some(durations);
    };

    let spaced = last.checked_add(config.min_diff.max(1))?;
    let scaled_low = (last as f64 * config.min_mult).floor();
    if scaled_low > f64::from(u32::MAX) {
        return None;
    }
    let scaled_low = scaled_low as u32;
    // Float-to-int `as` casts saturate, so a huge product clamps to u32::MAX.
    let scaled_high = (last as f64 * config.max_mult).ceil() as u32;

    Bounds::new(spaced.max(scaled_low), scaled_high).intersection(&durations)
}
