// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The queue and the people in it.
//!
//! - Participant: the five friends, in queue order
//! - constants: group size, batch table defaults
//! - Simulation: the literal queue, for checking small cases

pub mod constants;
pub mod participant;
pub mod simulation;

// Re-export for convenience
pub use constants::*;
pub use participant::{Participant, NAMES};
pub use simulation::{simulate, Simulation};
