use crate::core::CountingKey;
use crate::error::CountingSortError;
use cuneiform::cuneiform;

/// Bucket tables up to this size live on the stack instead of the heap.
pub const SMALL_DOMAIN_BUCKETS: usize = 256;

// Cache-aligned counts for small domains.
#[cuneiform]
struct SmallCounts {
    data: [usize; SMALL_DOMAIN_BUCKETS],
}

/// Sorts a slice of bounded, non-negative integers in place with
/// [Counting Sort](https://en.wikipedia.org/wiki/Counting_sort).
///
/// Allocates `max_value + 1` counters, counts every element, then walks the buckets from
/// `0` to `max_value` and writes each bucket value back as many times as it was counted.
/// `O(N + K)` time and space where `K = max_value`. Only bare keys are sorted; there is no
/// payload to carry.
///
/// # Errors
///
/// Every element must satisfy `0 <= value <= max_value`. The whole slice is validated
/// before anything is written, so on error the input is unchanged:
///
/// * [`CountingSortError::InvalidMaxValue`] if `max_value` is negative.
/// * [`CountingSortError::DomainTooLarge`] if `max_value + 1` buckets cannot be indexed or
///   the bucket table cannot be allocated.
/// * [`CountingSortError::NegativeValue`] for the first negative element.
/// * [`CountingSortError::ValueOutOfRange`] for the first element above `max_value`.
///
/// # Examples
///
/// ```
/// use classort::{counting_sort, CountingSortError};
///
/// let mut data = vec![1u32, 1, 4, 2, 2, 3, 7];
/// counting_sort(&mut data, 7).unwrap();
/// assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 7]);
///
/// let mut data = vec![1, 8];
/// let err = counting_sort(&mut data, 7).unwrap_err();
/// assert_eq!(
///     err,
///     CountingSortError::ValueOutOfRange { position: 1, value: 8, max_value: 7 }
/// );
/// assert_eq!(data, vec![1, 8]);
/// ```
pub fn counting_sort<K: CountingKey>(
    slice: &mut [K],
    max_value: K,
) -> Result<(), CountingSortError> {
    tracing::trace!(algorithm = "counting_sort", len = slice.len(), "sorting");

    if max_value < K::ZERO {
        let err = CountingSortError::InvalidMaxValue {
            max_value: max_value.to_i128(),
        };
        tracing::debug!(%err, "rejected counting sort input");
        return Err(err);
    }

    let buckets = max_value
        .to_bucket()
        .and_then(|max| max.checked_add(1))
        .ok_or(CountingSortError::DomainTooLarge {
            max_value: max_value.to_i128(),
        })?;

    let result = if buckets <= SMALL_DOMAIN_BUCKETS {
        tracing::debug!(buckets, storage = "stack", "allocating bucket table");
        let mut counts = SmallCounts {
            data: [0; SMALL_DOMAIN_BUCKETS],
        };
        count_and_emit(slice, max_value, &mut counts.data[..buckets])
    } else {
        tracing::debug!(buckets, storage = "heap", "allocating bucket table");
        let mut counts: Vec<usize> = Vec::new();
        if counts.try_reserve_exact(buckets).is_err() {
            let err = CountingSortError::DomainTooLarge {
                max_value: max_value.to_i128(),
            };
            tracing::debug!(%err, "rejected counting sort input");
            return Err(err);
        }
        counts.resize(buckets, 0);
        count_and_emit(slice, max_value, &mut counts)
    };

    if let Err(err) = &result {
        tracing::debug!(%err, "rejected counting sort input");
    }
    result
}

fn count_and_emit<K: CountingKey>(
    slice: &mut [K],
    max_value: K,
    counts: &mut [usize],
) -> Result<(), CountingSortError> {
    // 1. Validate and count. Nothing is written to `slice` until every element passed.
    for (position, &value) in slice.iter().enumerate() {
        if value < K::ZERO {
            return Err(CountingSortError::NegativeValue {
                position,
                value: value.to_i128(),
            });
        }
        if value > max_value {
            return Err(CountingSortError::ValueOutOfRange {
                position,
                value: value.to_i128(),
                max_value: max_value.to_i128(),
            });
        }
        // Unreachable once `max_value` mapped to a bucket; kept to avoid an unwrap.
        let Some(bucket) = value.to_bucket() else {
            return Err(CountingSortError::DomainTooLarge {
                max_value: max_value.to_i128(),
            });
        };
        counts[bucket] += 1;
    }

    // 2. Emit buckets in ascending order.
    let mut sorted_index = 0;
    for (bucket, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let end = sorted_index + count;
        slice[sorted_index..end].fill(K::from_bucket(bucket));
        sorted_index = end;
    }

    Ok(())
}

/// Counting sort with `max_value` taken from the input itself.
///
/// An empty slice is left as is. A slice holding negative values fails with
/// [`CountingSortError::NegativeValue`] at the first negative element.
///
/// # Examples
///
/// ```
/// use classort::counting_sort_auto;
///
/// let mut data = vec![1u8, 1, 4, 2, 2, 3, 7];
/// counting_sort_auto(&mut data).unwrap();
/// assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 7]);
/// ```
pub fn counting_sort_auto<K: CountingKey>(slice: &mut [K]) -> Result<(), CountingSortError> {
    let Some(max_value) = slice.iter().copied().max() else {
        return Ok(());
    };
    counting_sort(slice, max_value.max(K::ZERO))
}
