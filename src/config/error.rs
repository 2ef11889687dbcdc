use thiserror::Error;

/// Configuration problems detected before any search starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Duration range [{min}, {max}] is empty")]
    EmptyDurationRange { min: u32, max: u32 },

    #[error("Set size range [{min}, {max}] is empty")]
    EmptySetSizeRange { min: usize, max: usize },

    #[error("Pool length range [{min}, {max}] is empty")]
    EmptyPoolLengthRange { min: usize, max: usize },

    #[error("Pool sum range [{min}, {max}] is empty")]
    EmptyPoolSumRange { min: u64, max: u64 },

    #[error("Multiplier must be a finite, non-negative number, got {0}")]
    InvalidMultiplier(f64),

    #[error("Minimum multiplier {min} exceeds maximum multiplier {max}")]
    InvertedMultipliers { min: f64, max: f64 },

    #[error("Durations must be positive, found 0")]
    ZeroDuration,

    #[error("Forced duration {0} appears more than once")]
    DuplicateForcedDuration(u32),

    #[error("Forced prefix has {len} durations but sets hold at most {max_set_size}")]
    ForcedPrefixTooLong { len: usize, max_set_size: usize },

    #[error("Pool length must be at least 1")]
    ZeroPoolLength,
}
