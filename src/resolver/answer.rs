// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The full pipeline: position in, participant out.

use std::fmt;

use crate::cycle::{locate, CyclePosition};
use crate::queue::Participant;

use super::resolve;

/// Result of a query, with the intermediate cycle and offset kept for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Answer {
    pub position: CyclePosition,
    pub participant: Participant,
}

/// Who is admitted at 0-indexed position `n`.
///
/// Both shell modes go through this, so a single query and the matching
/// batch row always agree.
pub fn answer(n: u64) -> Answer {
    let position = locate(n);
    Answer {
        position,
        participant: resolve(position),
    }
}

/// Formats as `<index> (c = <C>; k = <K>; <Name>)`.
impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}; {})",
            self.participant.index(),
            self.position,
            self.participant
        )
    }
}
