use thiserror::Error;

/// Invalid-argument failures reported by [`counting_sort`](crate::counting_sort).
///
/// Validation runs before the slice is written, so on error the input is left exactly as
/// the caller passed it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountingSortError {
    #[error("max value {max_value} is negative")]
    InvalidMaxValue { max_value: i128 },
    #[error("max value {max_value} does not fit a bucket table on this platform")]
    DomainTooLarge { max_value: i128 },
    #[error("negative value {value} at position {position}")]
    NegativeValue { position: usize, value: i128 },
    #[error("value {value} at position {position} exceeds max value {max_value}")]
    ValueOutOfRange {
        position: usize,
        value: i128,
        max_value: i128,
    },
}
