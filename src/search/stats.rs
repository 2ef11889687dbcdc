//! Counters accumulated while a search runs.

use std::fmt::Display;

/// Work done by a search so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct duration sets produced by the generator.
    pub sets_found: u64,
    /// Set analyses run, one per set and pool length.
    pub sets_analyzed: u64,
    /// Candidate pools enumerated before filtering.
    pub pools_enumerated: u64,
    /// Sum buckets that passed every filter.
    pub buckets_kept: u64,
    /// Records emitted (set and pool length pairs with at least one bucket).
    pub records: u64,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} sets found, {} set analyses, {} pools enumerated, {} sums kept, {} records",
            self.sets_found,
            self.sets_analyzed,
            self.pools_enumerated,
            self.buckets_kept,
            self.records
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = SearchStats::default();
        assert_eq!(stats.sets_found, 0);
        assert_eq!(stats.sets_analyzed, 0);
        assert_eq!(stats.records, 0);
    }

    #[test]
    fn test_display() {
        let stats = SearchStats {
            sets_found: 5,
            sets_analyzed: 10,
            pools_enumerated: 350,
            buckets_kept: 2,
            records: 1,
        };
        assert_eq!(
            stats.to_string(),
            "5 sets found, 10 set analyses, 350 pools enumerated, 2 sums kept, 1 records"
        );
    }
}
