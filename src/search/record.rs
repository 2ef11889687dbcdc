//! Result records produced by a search.

use std::fmt::Display;

use thiserror::Error;

use crate::durations::DurationSet;
use crate::pools::SumBuckets;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Pools that could not have come from the record's set and pool length.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Pool {pool} (sum {sum}) holds {found} durations, expected {expected}")]
    PoolLength {
        sum: u64,
        pool: String,
        expected: usize,
        found: usize,
    },

    #[error("Pool {pool} (sum {sum}) uses {value}, which is not in the set")]
    UnknownDuration { sum: u64, pool: String, value: u32 },
}

/// One duration set together with the pools that qualified for a pool length.
///
/// Serialized as `{"poolLength": 4, "set": [1, 2, ...], "pools": {"18": [[1, 1, 1, 15], ...]}}`.
/// Deserialization runs [`SearchRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchRecord {
    pub pool_length: usize,
    pub set: DurationSet,
    pub pools: SumBuckets,
}

impl SearchRecord {
    /// Checks that every pool has `pool_length` durations, all drawn from `set`.
    pub fn validate(&self) -> Result<(), RecordError> {
        for bucket in &self.pools {
            for pool in bucket.pools() {
                if pool.len() != self.pool_length {
                    return Err(RecordError::PoolLength {
                        sum: bucket.sum(),
                        pool: pool.to_string(),
                        expected: self.pool_length,
                        found: pool.len(),
                    });
                }
                let missing = pool
                    .iter()
                    .find(|&&value| self.set.binary_search(&value).is_err());
                if let Some(&value) = missing {
                    return Err(RecordError::UnknownDuration {
                        sum: bucket.sum(),
                        pool: pool.to_string(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SearchRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Fields {
            pool_length: usize,
            set: DurationSet,
            pools: SumBuckets,
        }

        let Fields {
            pool_length,
            set,
            pools,
        } = <Fields as serde::Deserialize>::deserialize(deserializer)?;
        let record = Self {
            pool_length,
            set,
            pools,
        };
        record.validate().map_err(serde::de::Error::custom)?;
        Ok(record)
    }
}

impl Display for SearchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pool length: {}", self.pool_length)?;
        write!(f, "Set: {}", self.set)?;
        for bucket in &self.pools {
            write!(f, "\nPools (sum {}): [", bucket.sum())?;
            for (i, pool) in bucket.pools().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", pool)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
