//! Full duration search: every pool length against every generated set.
//!
//! [`DurationSearch`] composes the [`SetGenerator`] and the [`PoolAnalyzer`].
//! The two stages interleave lazily: each set is analyzed as soon as it is
//! generated, so at any time only one generation branch and the pools of one
//! set are held in memory.
//!
//! # Module Structure
//!
//! - `record` - [`SearchRecord`], one qualifying (pool length, set) pair
//! - `stats` - [`SearchStats`] counters

mod record;
mod stats;

pub use record::{RecordError, SearchRecord};
pub use stats::SearchStats;

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use log::debug;

use crate::config::{ConfigError, SearchConfig};
use crate::durations::{DurationSets, SetGenerator};
use crate::pools::PoolAnalyzer;

/// A validated search ready to run.
#[derive(Debug, Clone)]
pub struct DurationSearch {
    generator: SetGenerator,
    analyzer: PoolAnalyzer,
}

impl DurationSearch {
    /// Validates `config` before any search work starts.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        let analyzer = PoolAnalyzer::new(&config)?;
        let generator = SetGenerator::new(config)?;
        Ok(Self {
            generator,
            analyzer,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        self.generator.config()
    }

    pub fn generator(&self) -> &SetGenerator {
        &self.generator
    }

    pub fn analyzer(&self) -> &PoolAnalyzer {
        &self.analyzer
    }

    /// Returns a lazy iterator over all records, pool length by pool length.
    ///
    /// Within one pool length, records follow the generator's set order.
    pub fn records(&self) -> Records<'_> {
        Records {
            search: self,
            pool_lengths: self.config().pool_length_range.to_range(),
            current: None,
            stats: SearchStats::default(),
            finished: false,
        }
    }

    /// Runs the search to completion.
    pub fn run(&self) -> (Vec<SearchRecord>, SearchStats) {
        let mut records = self.records();
        let found: Vec<SearchRecord> = records.by_ref().collect();
        (found, records.stats())
    }
}

/// Iterator over the records of a [`DurationSearch`].
#[derive(Debug, Clone)]
pub struct Records<'a> {
    search: &'a DurationSearch,
    pool_lengths: RangeInclusive<usize>,
    /// Pool length in progress and the sets still to analyze for it.
    current: Option<(usize, DurationSets<'a>)>,
    stats: SearchStats,
    finished: bool,
}

impl Records<'_> {
    /// Counters for the work done so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Iterator for Records<'_> {
    type Item = SearchRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((pool_length, sets)) = self.current.as_mut() else {
                match self.pool_lengths.next() {
                    Some(pool_length) => {
                        debug!("analyzing pools of length {}", pool_length);
                        self.current = Some((pool_length, self.search.generator.iter()));
                        continue;
                    }
                    None => {
                        if !self.finished {
                            self.finished = true;
                            debug!("search finished: {}", self.stats);
                        }
                        return None;
                    }
                }
            };
            let pool_length = *pool_length;

            let Some(set) = sets.next() else {
                self.current = None;
                continue;
            };
            self.stats.sets_analyzed += 1;
            if pool_length == self.search.config().pool_length_range.start() {
                self.stats.sets_found += 1;
            }

            let (pools, candidates) = self.search.analyzer.analyze_unchecked(&set, pool_length);
            self.stats.pools_enumerated += candidates as u64;
            if pools.is_empty() {
                continue;
            }

            self.stats.buckets_kept += pools.len() as u64;
            self.stats.records += 1;
            return Some(SearchRecord {
                pool_length,
                set,
                pools,
            });
        }
    }
}

impl FusedIterator for Records<'_> {}
