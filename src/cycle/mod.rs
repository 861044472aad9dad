// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CycleLocator: find which doubling cycle a position falls in.
//!
//! Locating a position is a division where the divisor doubles every step:
//! keep removing whole segments from N while one still fits, and whatever is
//! left is the offset K into the current cycle C.
//!
//! ```text
//! Cycle   Segment (participant ids)
//! 1       0 0 1 1 2 2 3 3 4 4
//! 2       0 0 0 0 1 1 1 1 2 2 2 2 3 3 3 3 4 4 4 4
//! 3       ...each id eight times...
//! ```
//!
//! Position 0 lands at C = 1, K = 0. Cycle 0 is never returned.

pub mod segment;

pub use segment::{segment_length, segments_before};

use std::fmt;

use log::{debug, trace};

use crate::queue::constants::FIRST_CYCLE;

/// A position expressed as (cycle, offset within that cycle's segment).
///
/// Produced only by [`locate`], which guarantees
/// `offset < segment_length(cycle)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclePosition {
    /// Cycle index C, at least 1.
    pub cycle: u32,

    /// Offset K into the cycle's segment.
    pub offset: u64,
}

impl CyclePosition {
    /// Rebuild the 0-indexed position this was located from.
    pub fn absolute(&self) -> u64 {
        segments_before(self.cycle).saturating_add(self.offset)
    }
}

impl fmt::Display for CyclePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c = {}; k = {}", self.cycle, self.offset)
    }
}

/// Decompose 0-indexed position `n` into its cycle and offset.
///
/// Total over `u64`: once a segment no longer fits in `u64` it is longer
/// than any remainder, so the loop always stops by cycle 61.
pub fn locate(n: u64) -> CyclePosition {
    let mut cycle = FIRST_CYCLE;
    let mut remaining = n;

    while let Some(length) = segment_length(cycle).filter(|&len| len <= remaining) {
        trace!("Position {}: skipping cycle {} ({} admissions)", n, cycle, length);
        remaining -= length;
        cycle += 1;
    }

    let position = CyclePosition {
        cycle,
        offset: remaining,
    };
    debug!("Located position {} at {}", n, position);
    position
}
