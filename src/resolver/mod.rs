// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PositionResolver: map (cycle, offset) back to a participant.
//!
//! Inside cycle C each participant occupies a run of `2^C` consecutive
//! places, so the participant id is `floor(K / 2^C)`. Because
//! `K < 5 × 2^C`, the id is always below 5.

pub mod answer;

pub use answer::{answer, Answer};

use crate::cycle::CyclePosition;
use crate::queue::constants::GROUP_SIZE;
use crate::queue::Participant;

/// Participant id for a located position: `offset / 2^cycle`, exactly.
pub fn resolve_index(position: CyclePosition) -> u64 {
    position.offset.checked_shr(position.cycle).unwrap_or(0)
}

/// Participant for a located position.
///
/// # Panics
///
/// Panics if `position` was not produced by [`crate::cycle::locate`] and its
/// offset runs past the end of the cycle's segment.
pub fn resolve(position: CyclePosition) -> Participant {
    let index = resolve_index(position);
    debug_assert!(
        (index as usize) < GROUP_SIZE,
        "offset {} beyond segment of cycle {}",
        position.offset,
        position.cycle
    );
    Participant::new(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{locate, segment_length};

    #[test]
    fn test_resolve_index_is_floor() {
        let p = CyclePosition {
            cycle: 2,
            offset: 3,
        };
        assert_eq!(resolve_index(p), 0);
        let p = CyclePosition {
            cycle: 2,
            offset: 4,
        };
        assert_eq!(resolve_index(p), 1);
        let p = CyclePosition {
            cycle: 3,
            offset: 39,
        };
        assert_eq!(resolve_index(p), 4);
    }

    #[test]
    fn test_resolve_index_wide_shift() {
        let p = CyclePosition {
            cycle: 64,
            offset: u64::MAX,
        };
        assert_eq!(resolve_index(p), 0);
    }

    #[test]
    fn test_resolve_every_offset_in_cycle() {
        for cycle in 1..=8 {
            let len = segment_length(cycle).unwrap();
            for offset in 0..len {
                let index = resolve_index(CyclePosition { cycle, offset });
                assert_eq!(index, offset / (1 << cycle));
                assert!(index < 5);
            }
        }
    }

    #[test]
    fn test_resolve_located() {
        assert_eq!(resolve(locate(0)), Participant::Sheldon);
        assert_eq!(resolve(locate(4)), Participant::Penny);
        assert_eq!(resolve(locate(10)), Participant::Sheldon);
        assert_eq!(resolve(locate(29)), Participant::Howard);
        assert_eq!(resolve(locate(u64::MAX)), Participant::Rajesh);
    }

    #[test]
    #[should_panic]
    fn test_resolve_rejects_offset_past_segment() {
        resolve(CyclePosition {
            cycle: 1,
            offset: 10,
        });
    }
}
