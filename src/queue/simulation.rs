// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct simulation of the queue.
//!
//! The person at the front drinks, then rejoins the back twice. This is the
//! slow way to answer a query and is only used to cross-check the closed
//! form on small inputs.
//!
//! The literal queue runs five admissions ahead of the closed form: its
//! first round has each person once, while the closed form's first segment
//! already has each person twice. For every `n`,
//! `simulate(n + 5) == answer(n).participant`.

use std::collections::VecDeque;

use log::trace;

use super::constants::{GROUP_SIZE, MAX_SIMULATION};
use super::participant::Participant;

/// Iterator over the participants in the order they are admitted.
#[derive(Debug, Clone)]
pub struct Simulation {
    queue: VecDeque<Participant>,
    admitted: u64,
}

impl Simulation {
    pub fn new() -> Self {
        let mut queue = VecDeque::with_capacity(GROUP_SIZE * 2);
        queue.extend(Participant::all());
        Simulation { queue, admitted: 0 }
    }

    /// Number of people admitted so far.
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Current queue length.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Simulation {
    type Item = Participant;

    fn next(&mut self) -> Option<Participant> {
        // Never empties: each admission adds one net person.
        let front = self.queue.pop_front()?;
        self.queue.push_back(front);
        self.queue.push_back(front);
        self.admitted += 1;
        Some(front)
    }
}

/// Who is admitted at 0-indexed position `n`, found by walking the queue.
///
/// Returns None when `n` exceeds [`MAX_SIMULATION`].
pub fn simulate(n: u64) -> Option<Participant> {
    if n > MAX_SIMULATION {
        trace!("Refusing to simulate {} admissions", n);
        return None;
    }
    let steps = usize::try_from(n).ok()?;
    Simulation::new().nth(steps)
}
