// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segment lengths.
//!
//! Cycle C is a block of `5 × 2^C` admissions in which each participant
//! appears `2^C` times in a row. Lengths double from one cycle to the next.

use crate::queue::constants::GROUP_SIZE;

/// Number of admissions in cycle `cycle`, i.e. `5 × 2^cycle`.
///
/// Computed exactly with shifts. Returns None if the length does not fit in
/// a `u64`; callers can treat that as "longer than any remaining position".
pub fn segment_length(cycle: u32) -> Option<u64> {
    let power = 1u64.checked_shl(cycle)?;
    (GROUP_SIZE as u64).checked_mul(power)
}

/// Total admissions in cycles `1..cycle`, saturating at `u64::MAX`.
///
/// For any `n`, `locate(n)` satisfies
/// `n == segments_before(c) + k`.
pub fn segments_before(cycle: u32) -> u64 {
    (1..cycle)
        .map(|c| segment_length(c).unwrap_or(u64::MAX))
        .fold(0u64, |total, len| total.saturating_add(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_length_small() {
        assert_eq!(segment_length(0), Some(5));
        assert_eq!(segment_length(1), Some(10));
        assert_eq!(segment_length(2), Some(20));
        assert_eq!(segment_length(3), Some(40));
    }

    #[test]
    fn test_segment_length_doubles() {
        for c in 2..=61 {
            let prev = segment_length(c - 1).unwrap();
            let this = segment_length(c).unwrap();
            assert_eq!(this, prev * 2, "cycle {}", c);
        }
    }

    #[test]
    fn test_segment_length_overflow() {
        // 5 × 2^61 still fits, 5 × 2^62 does not.
        assert!(segment_length(61).is_some());
        assert_eq!(segment_length(62), None);
        assert_eq!(segment_length(64), None);
    }

    #[test]
    fn test_segments_before() {
        assert_eq!(segments_before(1), 0);
        assert_eq!(segments_before(2), 10);
        assert_eq!(segments_before(3), 30);
        assert_eq!(segments_before(4), 70);
        // Closed form: 5 × 2^C - 10
        for c in 1..=40 {
            assert_eq!(segments_before(c), (5u64 << c) - 10);
        }
    }

    #[test]
    fn test_segments_before_saturates() {
        assert_eq!(segments_before(70), u64::MAX);
    }
}
