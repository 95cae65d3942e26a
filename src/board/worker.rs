//! Workers: the pieces each player moves.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use crate::core::PlayerId;

/// Index of a worker in the board's registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub u8);

impl WorkerId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Worker {}", self.0)
    }
}

/// A worker on the board.
///
/// `position` mirrors the occupant of the cell it stands on; the board
/// updates both together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    owner: PlayerId,
    ordinal: u8,
    position: Coord,
}

impl Worker {
    pub(crate) fn new(id: WorkerId, owner: PlayerId, ordinal: u8, position: Coord) -> Self {
        Self {
            id,
            owner,
            ordinal,
            position,
        }
    }

    #[must_use]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// 0 or 1 within the owner's pair.
    #[must_use]
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    #[must_use]
    pub fn position(&self) -> Coord {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }
}
