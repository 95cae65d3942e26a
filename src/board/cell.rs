//! A single board cell: terrain, occupancy and UI marks.

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::coord::Coord;
use super::worker::WorkerId;

/// Selection mark the presentation layer colours cells by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    /// The acting worker's cell.
    Selected,
    /// A cell the current click would act on.
    Highlighted,
}

/// What a highlighted cell would do if clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightKind {
    #[default]
    None,
    Move,
    Build,
}

/// One cell of the board.
///
/// `sealed` and `flooded` only ever go from false to true. The selection,
/// highlight and wrath-selected marks are UI state and carry no rule
/// meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    block: Block,
    occupant: Option<WorkerId>,
    sealed: bool,
    flooded: bool,
    selection: Selection,
    highlight: HighlightKind,
    wrath_selected: bool,
}

impl Cell {
    /// Empty ground at `coord`.
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            block: Block::new(),
            occupant: None,
            sealed: false,
            flooded: false,
            selection: Selection::None,
            highlight: HighlightKind::None,
            wrath_selected: false,
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub fn block(&self) -> &Block {
        &self.block
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.block.level()
    }

    #[must_use]
    pub fn has_dome(&self) -> bool {
        self.block.has_dome()
    }

    #[must_use]
    pub fn occupant(&self) -> Option<WorkerId> {
        self.occupant
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    #[must_use]
    pub fn is_flooded(&self) -> bool {
        self.flooded
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn highlight(&self) -> HighlightKind {
        self.highlight
    }

    #[must_use]
    pub fn is_wrath_selected(&self) -> bool {
        self.wrath_selected
    }

    /// A piece can be added: anything short of a dome.
    #[must_use]
    pub fn can_build(&self) -> bool {
        !self.block.has_dome()
    }

    /// Set the tier directly (clamped to `0..=3`).
    ///
    /// Bypasses the rules (tiers may drop): scenario setup only.
    #[doc(hidden)]
    pub fn set_level(&mut self, level: i32) {
        self.block.set_level(level);
    }

    /// Seal permanently. Outside a wrath this bypasses the rules.
    #[doc(hidden)]
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Flood permanently. Outside a wrath this bypasses the rules.
    #[doc(hidden)]
    pub fn flood(&mut self) {
        self.flooded = true;
    }

    pub(crate) fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    pub(crate) fn set_occupant(&mut self, worker: Option<WorkerId>) {
        self.occupant = worker;
    }

    pub(crate) fn mark(&mut self, selection: Selection, highlight: HighlightKind) {
        self.selection = selection;
        self.highlight = highlight;
    }

    pub(crate) fn set_wrath_selected(&mut self, selected: bool) {
        self.wrath_selected = selected;
    }
}
