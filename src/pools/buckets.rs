//! Pools grouped by their total, in first-seen order.

use std::collections::{BTreeSet, HashMap};

use rand::seq::SliceRandom;
use rand::Rng;

use super::Pool;

/// All pools sharing one total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumBucket {
    sum: u64,
    pools: Vec<Pool>,
}

impl SumBucket {
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Pools in the order they were inserted.
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Every distinct duration appearing in at least one pool.
    pub fn used_durations(&self) -> BTreeSet<u32> {
        self.pools
            .iter()
            .flat_map(|pool| pool.iter().copied())
            .collect()
    }

    /// Draws one pool uniformly at random.
    ///
    /// Since all pools in a bucket share the same total, any draw gives the
    /// same overall duration.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Pool> {
        self.pools.choose(rng)
    }
}

/// Mapping from pool total to [`SumBucket`], iterated in the order each
/// total was first inserted.
///
/// # Internal Structure
/// - `buckets`: buckets in first-seen order
/// - `index_by_sum`: `HashMap` from total to position in `buckets`
#[derive(Debug, Clone, Default)]
pub struct SumBuckets {
    buckets: Vec<SumBucket>,
    index_by_sum: HashMap<u64, usize>,
}

impl SumBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct totals.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of pools across all buckets.
    pub fn pool_count(&self) -> usize {
        self.buckets.iter().map(SumBucket::len).sum()
    }

    /// Appends `pool` to the bucket for its total, creating it if needed.
    pub fn insert(&mut self, pool: Pool) {
        let sum = pool.sum();
        match self.index_by_sum.get(&sum) {
            Some(&index) => self.buckets[index].pools.push(pool),
            None => {
                self.index_by_sum.insert(sum, self.buckets.len());
                self.buckets.push(SumBucket {
                    sum,
                    pools: vec![pool],
                });
            }
        }
    }

    /// Gets the bucket for a total (if present).
    pub fn get(&self, sum: u64) -> Option<&SumBucket> {
        let index = self.index_by_sum.get(&sum)?;
        self.buckets.get(*index)
    }

    pub fn contains_sum(&self, sum: u64) -> bool {
        self.index_by_sum.contains_key(&sum)
    }

    /// Totals in first-seen order.
    pub fn sums(&self) -> impl Iterator<Item = u64> + '_ {
        self.buckets.iter().map(SumBucket::sum)
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, SumBucket> {
        self.buckets.iter()
    }

    /// Keeps only the buckets for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&SumBucket) -> bool,
    {
        self.buckets.retain(keep);
        self.index_by_sum = self
            .buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| (bucket.sum, index))
            .collect();
    }
}

impl PartialEq for SumBuckets {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl Eq for SumBuckets {}

impl FromIterator<Pool> for SumBuckets {
    fn from_iter<I: IntoIterator<Item = Pool>>(iter: I) -> Self {
        let mut buckets = SumBuckets::new();
        for pool in iter {
            buckets.insert(pool);
        }
        buckets
    }
}

impl<'a> IntoIterator for &'a SumBuckets {
    type Item = &'a SumBucket;
    type IntoIter = std::slice::Iter<'a, SumBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SumBuckets {
    type Item = SumBucket;
    type IntoIter = std::vec::IntoIter<SumBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

// =============================================================================
// SumBuckets Serde Support
// =============================================================================

/// Buckets travel as a map `{sum: [[duration, ...], ...]}` in first-seen order.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for SumBuckets {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for bucket in self.iter() {
                map.serialize_entry(&bucket.sum, &bucket.pools)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for SumBuckets {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct BucketsVisitor;

            impl<'de> Visitor<'de> for BucketsVisitor {
                type Value = SumBuckets;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a map from pool totals to lists of pools")
                }

                fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut buckets = SumBuckets::new();
                    while let Some((sum, pools)) = map.next_entry::<u64, Vec<Pool>>()? {
                        if buckets.contains_sum(sum) {
                            return Err(de::Error::custom(format!("duplicate total {}", sum)));
                        }
                        if let Some(pool) = pools.iter().find(|pool| pool.sum() != sum) {
                            return Err(de::Error::custom(format!(
                                "pool {} does not add up to {}",
                                pool, sum
                            )));
                        }
                        buckets.index_by_sum.insert(sum, buckets.buckets.len());
                        buckets.buckets.push(SumBucket { sum, pools });
                    }
                    Ok(buckets)
                }
            }

            deserializer.deserialize_map(BucketsVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(values: &[u32]) -> Pool {
        Pool::new(values.to_vec())
    }

    #[test]
    fn test_insert_groups_by_sum() {
        let buckets: SumBuckets = [pool(&[1, 1, 1, 15]), pool(&[2, 2, 4, 10]), pool(&[1, 2])]
            .into_iter()
            .collect();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.pool_count(), 3);
        assert_eq!(buckets.get(18).map(SumBucket::len), Some(2));
        assert_eq!(buckets.get(3).map(SumBucket::len), Some(1));
        assert!(buckets.get(4).is_none());
    }

    #[test]
    fn test_sums_keep_first_seen_order() {
        let buckets: SumBuckets = [pool(&[10]), pool(&[3]), pool(&[7]), pool(&[1, 2])]
            .into_iter()
            .collect();
        assert_eq!(buckets.sums().collect::<Vec<_>>(), vec![10, 3, 7]);
    }

    #[test]
    fn test_pools_keep_insertion_order() {
        let buckets: SumBuckets = [pool(&[2, 2, 7, 7]), pool(&[1, 1, 1, 15])]
            .into_iter()
            .collect();
        let bucket = buckets.get(18).unwrap();
        assert_eq!(bucket.pools()[0], pool(&[2, 2, 7, 7]));
        assert_eq!(bucket.pools()[1], pool(&[1, 1, 1, 15]));
    }

    #[test]
    fn test_retain_preserves_order_and_lookup() {
        let mut buckets: SumBuckets = [pool(&[5]), pool(&[1]), pool(&[9]), pool(&[4])]
            .into_iter()
            .collect();
        buckets.retain(|bucket| bucket.sum() != 1);

        assert_eq!(buckets.sums().collect::<Vec<_>>(), vec![5, 9, 4]);
        assert!(!buckets.contains_sum(1));
        assert_eq!(buckets.get(9).map(SumBucket::sum), Some(9));
        assert_eq!(buckets.get(4).map(SumBucket::sum), Some(4));
    }

    #[test]
    fn test_used_durations() {
        let buckets: SumBuckets = [pool(&[1, 1, 1, 15]), pool(&[2, 2, 4, 10])]
            .into_iter()
            .collect();
        let used: Vec<u32> = buckets.get(18).unwrap().used_durations().into_iter().collect();
        assert_eq!(used, vec![1, 2, 4, 10, 15]);
    }

    #[test]
    fn test_choose_draws_from_bucket() {
        let buckets: SumBuckets = [pool(&[1, 1, 1, 15]), pool(&[2, 2, 4, 10]), pool(&[2, 2, 7, 7])]
            .into_iter()
            .collect();
        let bucket = buckets.get(18).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let drawn = bucket.choose(&mut rng).unwrap();
            assert!(bucket.pools().contains(drawn));
            assert_eq!(drawn.sum(), 18);
        }
    }

    #[test]
    fn test_choose_is_reproducible_with_seed() {
        let buckets: SumBuckets = [pool(&[1, 4]), pool(&[2, 3]), pool(&[5])]
            .into_iter()
            .collect();
        let bucket = buckets.get(5).unwrap();
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| bucket.choose(&mut rng).cloned())
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
    }

    #[test]
    fn test_equality_ignores_index_layout() {
        let mut a: SumBuckets = [pool(&[1]), pool(&[2])].into_iter().collect();
        let b: SumBuckets = [pool(&[2])].into_iter().collect();
        a.retain(|bucket| bucket.sum() == 2);
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_roundtrip_preserves_order() {
            let buckets: SumBuckets = [pool(&[10, 10]), pool(&[1, 2]), pool(&[3, 17])]
                .into_iter()
                .collect();
            let json = serde_json::to_string(&buckets).unwrap();
            assert_eq!(json, r#"{"20":[[10,10],[3,17]],"3":[[1,2]]}"#);
            let restored: SumBuckets = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, buckets);
            assert_eq!(restored.sums().collect::<Vec<_>>(), vec![20, 3]);
        }

        #[test]
        fn test_rejects_mismatched_total() {
            let result: Result<SumBuckets, _> = serde_json::from_str(r#"{"5":[[1,2]]}"#);
            assert!(result.is_err());
        }

        #[test]
        fn test_rejects_duplicate_total() {
            let result: Result<SumBuckets, _> =
                serde_json::from_str(r#"{"3":[[1,2]],"3":[[3]]}"#);
            assert!(result.is_err());
        }
    }
}
