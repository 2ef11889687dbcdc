use thiserror::Error;

/// Reasons a hand-built duration set is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationSetError {
    #[error("Duration set is empty")]
    Empty,

    #[error("Durations must be positive, found 0")]
    ZeroDuration,

    #[error("Duration {value} at position {index} does not exceed previous duration {previous}")]
    NotStrictlyIncreasing {
        index: usize,
        previous: u32,
        value: u32,
    },
}
