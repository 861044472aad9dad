// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the queue.
//!
//! The group size is fixed at five; everything else is derived from it or is
//! a default for the interactive shell.

use strum::EnumCount;

use super::Participant;

/// Number of distinct people in the queue.
pub const GROUP_SIZE: usize = Participant::COUNT;

/// Cycle index of the first segment.
///
/// Cycle C spans `GROUP_SIZE << C` admissions, so the first segment is ten
/// long and position 0 sits at cycle 1, never cycle 0.
pub const FIRST_CYCLE: u32 = 1;

/// Input value that switches the shell into batch mode.
pub const BATCH_SENTINEL: i64 = 0;

/// Number of rows printed in batch mode.
pub const DEFAULT_BATCH_ROWS: u64 = 100;

/// Largest 0-indexed admission the direct simulation will walk to.
///
/// The simulated queue grows by one person per admission, so this bounds
/// memory as well as time.
pub const MAX_SIMULATION: u64 = 1_000_000;

/// Prompt written before reading the query.
pub const PROMPT: &str = "Place (from 1) of person you want to find: ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_size() {
        assert_eq!(GROUP_SIZE, 5);
    }

    #[test]
    fn test_first_segment_length() {
        assert_eq!((GROUP_SIZE as u64) << FIRST_CYCLE, 10);
    }
}
