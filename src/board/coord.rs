//! Board coordinates.
//!
//! A `Coord` is the stable identity of a cell. Rules that need to
//! remember a cell ("the cell this worker started from", "the cell just
//! built on") store its coordinate, never a reference.

use serde::{Deserialize, Serialize};

/// The eight neighbour offsets, in the fixed scan order used wherever the
/// first matching neighbour matters (wrath push destination).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `(row, col)` position. May lie off the board; bounds are the board's
/// concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a row/column delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// True for the eight surrounding cells; a cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }

    /// All eight surrounding coordinates in `DIRECTIONS` order, unbounded.
    pub fn around(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS.iter().map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
