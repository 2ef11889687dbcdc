//! Lazy enumeration of duration sets.
//!
//! The traversal is a depth-first backtracking search driven by an explicit
//! stack of candidate ranges, one per appended position. Each stack frame
//! holds the values still to be tried at that depth; exhausting a frame pops
//! it, which backtracks to the previous position. A branch whose next
//! position admits no value never gets a frame, so infeasible subtrees are
//! never materialized.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use log::trace;

use super::admissible::next_duration_bounds;
use super::DurationSet;
use crate::config::{ConfigError, SearchConfig};

/// Produces every [`DurationSet`] consistent with a [`SearchConfig`].
///
/// The generator is restartable: each call to [`SetGenerator::iter`] walks
/// the same sequence from the beginning.
#[derive(Debug, Clone)]
pub struct SetGenerator {
    config: SearchConfig,
    prefix: Vec<u32>,
}

impl SetGenerator {
    /// Validates `config` and prepares a generator for it.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let prefix = config.sorted_prefix();
        Ok(Self { config, prefix })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The forced prefix every generated set starts with, ascending.
    pub fn prefix(&self) -> &[u32] {
        &self.prefix
    }

    /// Returns a fresh lazy iterator over all sets.
    ///
    /// Sets come ordered by increasing size and, within a size,
    /// lexicographically by their appended durations.
    pub fn iter(&self) -> DurationSets<'_> {
        DurationSets {
            config: &self.config,
            prefix: &self.prefix,
            sizes: self.config.set_size_range.to_range(),
            target: 0,
            current: Vec::new(),
            stack: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a SetGenerator {
    type Item = DurationSet;
    type IntoIter = DurationSets<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the duration sets of a [`SetGenerator`].
#[derive(Debug, Clone)]
pub struct DurationSets<'a> {
    config: &'a SearchConfig,
    prefix: &'a [u32],
    /// Set sizes not yet started.
    sizes: RangeInclusive<usize>,
    /// Size of the sets currently being built.
    target: usize,
    /// Partially built set: the prefix followed by one value per frame.
    current: Vec<u32>,
    /// Values left to try at each appended position.
    stack: Vec<RangeInclusive<u32>>,
}

impl DurationSets<'_> {
    /// Moves to the next set size. Returns the prefix itself when that size
    /// needs no appended durations.
    fn begin_size(&mut self, size: usize) -> Option<DurationSet> {
        self.target = size;
        self.current.clear();
        self.current.extend_from_slice(self.prefix);

        if size == self.prefix.len() {
            return Some(DurationSet::from_sorted_unchecked(self.prefix.to_vec()));
        }

        match next_duration_bounds(self.prefix.last().copied(), self.config) {
            Some(bounds) => self.stack.push(bounds.to_range()),
            None => trace!("set size {}: no duration fits after the prefix", size),
        }
        None
    }
}

impl Iterator for DurationSets<'_> {
    type Item = DurationSet;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let Some(frame) = self.stack.last_mut() else {
                let size = self.sizes.next()?;
                if size == 0 || size < self.prefix.len() {
                    trace!(
                        "skipping set size {}: forced prefix holds {} durations",
                        size,
                        self.prefix.len()
                    );
                    continue;
                }
                if let Some(set) = self.begin_size(size) {
                    return Some(set);
                }
                continue;
            };

            let Some(value) = frame.next() else {
                self.stack.pop();
                continue;
            };

            self.current.truncate(self.prefix.len() + depth - 1);
            self.current.push(value);

            if self.current.len() == self.target {
                return Some(DurationSet::from_sorted_unchecked(self.current.clone()));
            }

            if let Some(bounds) = next_duration_bounds(Some(value), self.config) {
                self.stack.push(bounds.to_range());
            }
        }
    }
}

impl FusedIterator for DurationSets<'_> {}
