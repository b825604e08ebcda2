// src/sampler.rs
// Rejection sampling of distinct numbers from an inclusive range.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::defs::{Column, NUMBERS_PER_COLUMN, Number};
use crate::error::BingoError;

/// Samples `count` distinct numbers from `range` using the thread RNG.
pub fn sample_unique(range: RangeInclusive<Number>, count: usize) -> Result<Vec<Number>, BingoError> {
    sample_unique_with(range, count, &mut rand::rng())
}

/// Samples `count` distinct numbers from `range`.
///
/// Values come back in the order they were first accepted, which is already
/// random, so no sorting is applied. A request larger than the range could
/// never be satisfied and is rejected up front.
pub fn sample_unique_with<R: Rng>(
    range: RangeInclusive<Number>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Number>, BingoError> {
    let (min, max) = (*range.start(), *range.end());
    if min > max {
        return Err(BingoError::InvalidRange { min, max });
    }

    let width = (max - min) as usize + 1;
    if count > width {
        return Err(BingoError::SampleTooLarge { count, width });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut numbers = Vec::with_capacity(count);
    while numbers.len() < count {
        let candidate = rng.random_range(min..=max);
        if seen.insert(candidate) {
            numbers.push(candidate);
        }
    }

    Ok(numbers)
}

/// Fills one card column with distinct numbers from the column's range.
///
/// Same rejection loop as [`sample_unique_with`], without the guards: a
/// column always fits in its range, which `defs` checks at compile time.
pub fn sample_column<R: Rng>(column: Column, rng: &mut R) -> [Number; NUMBERS_PER_COLUMN] {
    let range = column.range();
    let mut values = [0; NUMBERS_PER_COLUMN];
    let mut filled = 0;
    while filled < NUMBERS_PER_COLUMN {
        let candidate = rng.random_range(range.clone());
        if !values[..filled].contains(&candidate) {
            values[filled] = candidate;
            filled += 1;
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_within_range_and_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let numbers = sample_unique_with(16..=30, 5, &mut rng).unwrap();
        assert_eq!(numbers.len(), 5);
        assert!(numbers.iter().all(|n| (16..=30).contains(n)));
        let distinct: HashSet<_> = numbers.iter().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_sample_whole_range() {
        let mut numbers = sample_unique(1..=15, 15).unwrap();
        numbers.sort();
        assert_eq!(numbers, (1..=15).collect::<Vec<Number>>());
    }

    #[test]
    fn test_sample_zero_count() {
        assert_eq!(sample_unique(31..=45, 0).unwrap(), Vec::<Number>::new());
    }

    #[test]
    fn test_sample_single_value_range() {
        assert_eq!(sample_unique(42..=42, 1).unwrap(), vec![42]);
    }

    #[test]
    fn test_sample_too_large_is_rejected() {
        let result = sample_unique(1..=15, 16);
        assert_eq!(result, Err(BingoError::SampleTooLarge { count: 16, width: 15 }));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_is_rejected() {
        let result = sample_unique(30..=16, 1);
        assert_eq!(result, Err(BingoError::InvalidRange { min: 30, max: 16 }));
    }

    #[test]
    fn test_same_seed_same_sample() {
        let first = sample_unique_with(1..=75, 10, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = sample_unique_with(1..=75, 10, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_column_fills_every_cell() {
        let mut rng = StdRng::seed_from_u64(21);
        for column in Column::ALL {
            let values = sample_column(column, &mut rng);
            assert!(values.iter().all(|n| column.range().contains(n)));
            let distinct: HashSet<_> = values.iter().collect();
            assert_eq!(distinct.len(), NUMBERS_PER_COLUMN);
        }
    }

    mod properties {
        use proptest::prelude::*;
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use std::collections::HashSet;

        use crate::sampler::sample_unique_with;

        proptest! {
            #[test]
            fn prop_sample_is_distinct_and_bounded(
                min in 1u8..=75,
                span in 0u8..=20,
                count in 0usize..=21,
                seed in any::<u64>()
            ) {
                let max = min.saturating_add(span);
                let width = (max - min) as usize + 1;
                let mut rng = StdRng::seed_from_u64(seed);
                let result = sample_unique_with(min..=max, count, &mut rng);
                if count > width {
                    prop_assert!(result.is_err());
                } else {
                    let numbers = result.unwrap();
                    prop_assert_eq!(numbers.len(), count);
                    prop_assert!(numbers.iter().all(|n| (min..=max).contains(n)));
                    let distinct: HashSet<_> = numbers.iter().collect();
                    prop_assert_eq!(distinct.len(), count);
                }
            }
        }
    }
}
