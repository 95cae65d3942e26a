//! Board & cell model.
//!
//! - `Coord`: stable `(row, col)` identity of a cell
//! - `Block`: tier `0..=3` plus dome
//! - `Cell`: block, occupant, seal/flood terrain and UI marks
//! - `Worker`: a player's piece, registered on the board
//! - `Board`: the grid, the worker registry and the optional wrath
//!   selection sub-state
//!
//! Side effects are confined to the targeted cell; nothing here enforces
//! who may move or build where. That is `crate::rules::legality`.

mod block;
mod cell;
mod coord;
mod grid;
mod highlight;
mod worker;

pub use block::{Block, MAX_LEVEL};
pub use cell::{Cell, HighlightKind, Selection};
pub use coord::{Coord, DIRECTIONS};
pub use grid::{Board, WrathSelection, WrathTargets};
pub use worker::{Worker, WorkerId};
