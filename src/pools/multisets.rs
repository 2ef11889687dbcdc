//! Combinations with repetition.

use std::iter::FusedIterator;

use super::Pool;

/// Lazily enumerates every multiset of `length` values drawn from `source`.
///
/// Multisets are produced as index vectors in non-decreasing order, so for a
/// sorted `source` the pools come out sorted and in lexicographic order.
#[derive(Debug, Clone)]
pub struct Multisets<'a> {
    source: &'a [u32],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<'a> Multisets<'a> {
    pub fn new(source: &'a [u32], length: usize) -> Self {
        Self {
            source,
            indices: vec![0; length],
            started: false,
            exhausted: source.is_empty() && length > 0,
        }
    }

    /// Advances the index vector to the next non-decreasing combination.
    fn advance(&mut self) -> bool {
        let n = self.source.len();
        let Some(pos) = self.indices.iter().rposition(|&i| i + 1 < n) else {
            return false;
        };
        let bumped = self.indices[pos] + 1;
        for index in &mut self.indices[pos..] {
            *index = bumped;
        }
        true
    }
}

impl Iterator for Multisets<'_> {
    type Item = Pool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }

        let values = self.indices.iter().map(|&i| self.source[i]).collect();
        Some(Pool::from_sorted_unchecked(values))
    }
}

impl FusedIterator for Multisets<'_> {}

/// Number of multisets of size `k` over `n` distinct values, `C(n + k - 1, k)`.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn multiset_count(n: usize, k: usize) -> Option<u128> {
    if k == 0 {
        return Some(1);
    }
    if n == 0 {
        return Some(0);
    }
    let base = n as u128 - 1;
    let mut count: u128 = 1;
    for i in 1..=k as u128 {
        // count == C(base + i - 1, i - 1) here, so the division is exact.
        count = count.checked_mul(base + i)? / i;
    }
    Some(count)
}
