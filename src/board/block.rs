//! Building blocks stacked on a cell.

use serde::{Deserialize, Serialize};

/// The highest tier. A worker standing here has won.
pub const MAX_LEVEL: u8 = 3;

/// Tower on a single cell: a tier in `0..=3` plus an optional dome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    level: u8,
    dome: bool,
}

impl Block {
    /// Bare ground: level 0, no dome.
    #[must_use]
    pub const fn new() -> Self {
        Self { level: 0, dome: false }
    }

    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub const fn has_dome(&self) -> bool {
        self.dome
    }

    /// Add one piece: a tier below the top, a dome on top of tier 3.
    ///
    /// No-op once domed.
    pub fn build(&mut self) {
        if self.level < MAX_LEVEL {
            self.level += 1;
        } else if !self.dome {
            self.dome = true;
        }
    }

    /// Set the tier directly, clamped to `0..=3`. The dome is untouched.
    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(0, i32::from(MAX_LEVEL)) as u8;
    }

    /// Knock one tier off. Returns false when already at ground level.
    pub fn collapse(&mut self) -> bool {
        if self.level == 0 {
            return false;
        }
        self.level -= 1;
        true
    }
}
