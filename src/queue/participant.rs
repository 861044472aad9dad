// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Participant type.
//!
//! The queue starts as Sheldon, Leonard, Penny, Rajesh, Howard. A
//! participant's id is its place in that starting order.

use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, FromRepr, IntoStaticStr};

use super::constants::GROUP_SIZE;

/// Display names, indexed by participant id.
pub const NAMES: [&str; GROUP_SIZE] = ["Sheldon", "Leonard", "Penny", "Rajesh", "Howard"];

/// One of the five people in the queue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCountMacro,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Participant {
    Sheldon = 0,
    Leonard = 1,
    Penny = 2,
    Rajesh = 3,
    Howard = 4,
}

impl Participant {
    /// Look up a participant by id, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= GROUP_SIZE`.
    pub fn new(index: u64) -> Self {
        match Self::try_new(index) {
            Some(participant) => participant,
            None => panic!("Participant out of range: {}", index),
        }
    }

    /// Look up a participant by id, returning None if out of range.
    pub fn try_new(index: u64) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Get the participant id.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All participants in starting queue order.
    pub fn all() -> impl Iterator<Item = Participant> {
        Self::iter()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
