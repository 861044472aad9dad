// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Closed-form solver for the Double Cola queue.
//!
//! Five friends queue for a vending machine. Whoever drinks a can doubles and
//! both copies rejoin the back of the queue. Asking who drinks the N-th can
//! by simulation is hopeless for large N, so the answer is computed in
//! O(log N) instead.
//!
//! # Architecture
//!
//! Two pure functions compose into the answer:
//!
//! 1. **CycleLocator** ([`cycle::locate`]): strip whole doubling segments
//!    of length `5 × 2^C` off N, leaving the cycle index C and offset K.
//! 2. **PositionResolver** ([`resolver::resolve`]): divide K by `2^C` to
//!    recover the original participant.
//!
//! The [`shell`] module wraps the pipeline in the one-question interactive
//! prompt, and [`queue::simulation`] keeps the literal queue around as an
//! oracle for small N.
//!
//! # Example
//!
//! ```
//! use double_cola::{answer, Participant};
//!
//! let a = answer(0);
//! assert_eq!(a.participant, Participant::Sheldon);
//! assert_eq!((a.position.cycle, a.position.offset), (1, 0));
//! ```

pub mod cycle;
pub mod queue;
pub mod resolver;
pub mod shell;

// Re-export commonly used types
pub use cycle::{locate, segment_length, CyclePosition};
pub use queue::{Participant, Simulation, GROUP_SIZE, NAMES};
pub use resolver::{answer, resolve, resolve_index, Answer};
pub use shell::{Query, QueryError, Shell, ShellConfig};
