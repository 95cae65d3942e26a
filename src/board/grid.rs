//! The board: cell grid, worker registry and the wrath selection sub-state.
//!
//! Cells are stored row-major. The board is the single owner of every
//! cell and every worker; a worker's `position` and its cell's
//! `occupant` are only ever changed together, here.
//!
//! ## Wrath selection
//!
//! A board built with wrath support can be armed for a wrath selection.
//! While armed, each accepted `select_wrath_target` call records one
//! target; the caller applies the effect once `required` targets are in
//! (see `crate::wrath`). A board built without wrath support rejects
//! arming. Only the game's wrath commands reach this sub-state:
//!
//! ```compile_fail
//! use santorini_wrath::{Board, PlayerId, WrathKind};
//!
//! let mut board = Board::new(5, 5, true);
//! board.enter_wrath_selection(PlayerId::new(0), WrathKind::Seal);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::cell::Cell;
use super::coord::Coord;
use super::worker::{Worker, WorkerId};
use crate::core::{ActionError, PlayerId, SetupError};
use crate::wrath::WrathKind;

/// Targets picked so far during a wrath selection.
pub type WrathTargets = SmallVec<[Coord; 3]>;

/// An armed wrath selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrathSelection {
    owner: PlayerId,
    kind: WrathKind,
    targets: WrathTargets,
}

impl WrathSelection {
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn kind(&self) -> WrathKind {
        self.kind
    }

    /// Number of targets the effect needs.
    #[must_use]
    pub fn required(&self) -> usize {
        self.kind.required_targets()
    }

    #[must_use]
    pub fn targets(&self) -> &[Coord] {
        &self.targets
    }

    /// Targets still to pick before the effect fires.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.required().saturating_sub(self.targets.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.targets.len() >= self.required()
    }
}

/// Fixed-size game board.
#[derive(Clone, Debug)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    workers: Vec<Worker>,
    wrath_capable: bool,
    wrath: Option<WrathSelection>,
}

impl Board {
    /// Create an empty `rows x cols` board. Non-positive sizes give an
    /// empty board.
    #[must_use]
    pub fn new(rows: i32, cols: i32, wrath_capable: bool) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Coord::new(row, col))))
            .collect();

        Self {
            rows,
            cols,
            cells,
            workers: Vec::new(),
            wrath_capable,
            wrath: None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    // === Cells ===

    #[must_use]
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        (0..self.rows).contains(&row) && (0..self.cols).contains(&col)
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord.row, coord.col)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| (coord.row * self.cols + coord.col) as usize)
    }

    /// The cell at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<&Cell> {
        self.cell(Coord::new(row, col))
    }

    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).and_then(|i| self.cells.get(i))
    }

    /// Mutable access to a cell's terrain (tier, seal, flood).
    ///
    /// Bypasses the rules: scenario setup only. Occupancy and UI marks
    /// are not reachable through this.
    #[doc(hidden)]
    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let index = self.index(coord)?;
        self.cells.get_mut(index)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// True for cells in the outer ring.
    #[must_use]
    pub fn is_perimeter(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.row == 0
                || coord.col == 0
                || coord.row == self.rows - 1
                || coord.col == self.cols - 1)
    }

    /// In-bounds neighbours in the fixed direction order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.around().filter(move |c| self.contains(*c))
    }

    /// Add one piece to the cell at `coord`.
    ///
    /// Only checks that the cell can take another piece; who may build
    /// here is the legality layer's call. Returns whether anything was
    /// built.
    pub fn build(&mut self, coord: Coord) -> bool {
        match self.cell_mut(coord) {
            Some(cell) if cell.can_build() => {
                cell.block_mut().build();
                true
            }
            _ => false,
        }
    }

    /// Set the tier at `coord`, clamped to `0..=3`.
    ///
    /// Bypasses the rules (tiers may drop): scenario setup only.
    #[doc(hidden)]
    pub fn set_level(&mut self, coord: Coord, level: i32) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.set_level(level);
        }
    }

    // === Workers ===

    /// Put a new worker for `owner` on an empty, dome-free cell.
    pub fn place_worker(
        &mut self,
        owner: PlayerId,
        ordinal: u8,
        at: Coord,
    ) -> Result<WorkerId, SetupError> {
        let id = WorkerId(self.workers.len() as u8);
        let cell = self
            .cell_mut(at)
            .filter(|c| !c.is_occupied() && !c.has_dome())
            .ok_or(SetupError::InvalidPlacement(at))?;
        cell.set_occupant(Some(id));
        self.workers.push(Worker::new(id, owner, ordinal, at));

        debug!(%owner, worker = %id, %at, "worker placed");
        Ok(id)
    }

    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id.index())
    }

    #[must_use]
    pub fn worker_at(&self, coord: Coord) -> Option<&Worker> {
        self.cell(coord)
            .and_then(Cell::occupant)
            .and_then(|id| self.worker(id))
    }

    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn workers_of(&self, player: PlayerId) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(move |w| w.owner() == player)
    }

    /// Move a worker to `dest`, vacating its old cell.
    ///
    /// Legality is the caller's responsibility; this only refuses unknown
    /// workers and off-board or occupied destinations. Returns whether the
    /// worker now stands on the top tier.
    pub(crate) fn move_worker(&mut self, id: WorkerId, dest: Coord) -> bool {
        let Some(from) = self.worker(id).map(Worker::position) else {
            return false;
        };
        if self.cell(dest).map_or(true, Cell::is_occupied) {
            return false;
        }

        if let Some(cell) = self.cell_mut(from) {
            cell.set_occupant(None);
        }
        if let Some(cell) = self.cell_mut(dest) {
            cell.set_occupant(Some(id));
        }
        self.workers[id.index()].set_position(dest);

        self.cell(dest)
            .is_some_and(|c| c.level() == super::block::MAX_LEVEL)
    }

    // === Wrath selection ===

    #[must_use]
    pub fn is_wrath_capable(&self) -> bool {
        self.wrath_capable
    }

    #[must_use]
    pub fn is_wrath_mode_active(&self) -> bool {
        self.wrath.is_some()
    }

    #[must_use]
    pub fn wrath_selection(&self) -> Option<&WrathSelection> {
        self.wrath.as_ref()
    }

    /// Arm wrath selection for `owner`, discarding any previous targets.
    pub(crate) fn enter_wrath_selection(
        &mut self,
        owner: PlayerId,
        kind: WrathKind,
    ) -> Result<(), ActionError> {
        if !self.wrath_capable {
            return Err(ActionError::WrathUnsupported);
        }
        self.clear_wrath_marks();
        self.wrath = Some(WrathSelection {
            owner,
            kind,
            targets: SmallVec::new(),
        });
        debug!(%owner, ?kind, "wrath selection armed");
        Ok(())
    }

    /// Validate and record one wrath target.
    ///
    /// Rejects cells that are off the board, domed, already picked, or
    /// (for sealing) occupied. Returns whether the selection is now
    /// complete.
    pub(crate) fn select_wrath_target(&mut self, coord: Coord) -> Result<bool, ActionError> {
        let Some(selection) = self.wrath.as_ref() else {
            return Err(ActionError::NoWrathPending);
        };
        let cell = self.cell(coord).ok_or(ActionError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        })?;

        let valid = !cell.has_dome()
            && !selection.targets.contains(&coord)
            && !(selection.kind.requires_unoccupied() && cell.is_occupied());
        if !valid || selection.is_complete() {
            return Err(ActionError::InvalidWrathTarget(coord));
        }

        if let Some(cell) = self.cell_mut(coord) {
            cell.set_wrath_selected(true);
        }
        let selection = self.wrath.as_mut().ok_or(ActionError::NoWrathPending)?;
        selection.targets.push(coord);
        debug!(%coord, remaining = selection.remaining(), "wrath target selected");
        Ok(selection.is_complete())
    }

    /// Drop the picked targets but stay armed (effect failed).
    pub(crate) fn reset_wrath_targets(&mut self) {
        self.clear_wrath_marks();
        if let Some(selection) = self.wrath.as_mut() {
            selection.targets.clear();
        }
    }

    /// Disarm after the effect succeeded.
    pub(crate) fn finish_wrath(&mut self) {
        self.clear_wrath_marks();
        self.wrath = None;
    }

    /// Abandon a pending selection.
    pub(crate) fn cancel_wrath(&mut self) -> Result<WrathSelection, ActionError> {
        let selection = self.wrath.take().ok_or(ActionError::NoWrathPending)?;
        self.clear_wrath_marks();
        Ok(selection)
    }

    fn clear_wrath_marks(&mut self) {
        for cell in &mut self.cells {
            cell.set_wrath_selected(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(5, 5, true)
    }

    #[test]
    fn test_dimensions_and_bounds() {
        let board = board();
        assert_eq!(board.cells().count(), 25);
        assert!(board.is_in_bounds(0, 0));
        assert!(board.is_in_bounds(4, 4));
        assert!(!board.is_in_bounds(5, 0));
        assert!(!board.is_in_bounds(0, -1));
        assert!(board.cell_at(-1, 2).is_none());
        assert_eq!(board.cell_at(3, 1).map(Cell::coord), Some(Coord::new(3, 1)));
    }

    #[test]
    fn test_perimeter() {
        let board = board();
        assert!(board.is_perimeter(Coord::new(0, 2)));
        assert!(board.is_perimeter(Coord::new(4, 4)));
        assert!(board.is_perimeter(Coord::new(2, 0)));
        assert!(!board.is_perimeter(Coord::new(2, 2)));
        assert!(!board.is_perimeter(Coord::new(1, 3)));
        assert!(!board.is_perimeter(Coord::new(5, 5)));
    }

    #[test]
    fn test_neighbors_are_bounded() {
        let board = board();
        assert_eq!(board.neighbors(Coord::new(0, 0)).count(), 3);
        assert_eq!(board.neighbors(Coord::new(0, 2)).count(), 5);
        assert_eq!(board.neighbors(Coord::new(2, 2)).count(), 8);
    }

    #[test]
    fn test_build_until_dome() {
        let mut board = board();
        let c = Coord::new(1, 1);
        for _ in 0..4 {
            assert!(board.build(c));
        }
        assert!(board.cell(c).is_some_and(Cell::has_dome));
        assert!(!board.build(c));
        assert!(!board.build(Coord::new(9, 9)));
    }

    #[test]
    fn test_place_and_move_worker() {
        let mut board = board();
        let id = board
            .place_worker(PlayerId::new(0), 0, Coord::new(0, 0))
            .unwrap();
        assert!(board
            .place_worker(PlayerId::new(1), 0, Coord::new(0, 0))
            .is_err());

        board.set_level(Coord::new(0, 1), 3);
        assert!(board.move_worker(id, Coord::new(0, 1)));
        assert!(!board.cell_at(0, 0).unwrap().is_occupied());
        assert_eq!(board.worker_at(Coord::new(0, 1)).map(Worker::id), Some(id));
        assert_eq!(board.worker(id).map(Worker::position), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_wrath_selection_requires_capable_board() {
        let mut plain = Board::new(5, 5, false);
        assert_eq!(
            plain.enter_wrath_selection(PlayerId::new(0), WrathKind::Collapse),
            Err(ActionError::WrathUnsupported)
        );
        assert!(!plain.is_wrath_mode_active());
    }

    #[test]
    fn test_wrath_selection_validation() {
        let mut board = board();
        board
            .place_worker(PlayerId::new(1), 0, Coord::new(2, 2))
            .unwrap();
        board.set_level(Coord::new(0, 0), 3);
        board.build(Coord::new(0, 0));

        assert_eq!(
            board.select_wrath_target(Coord::new(1, 1)),
            Err(ActionError::NoWrathPending)
        );

        board
            .enter_wrath_selection(PlayerId::new(0), WrathKind::Seal)
            .unwrap();

        // Domed, occupied (seal only), off-board.
        assert!(board.select_wrath_target(Coord::new(0, 0)).is_err());
        assert!(board.select_wrath_target(Coord::new(2, 2)).is_err());
        assert!(board.select_wrath_target(Coord::new(7, 0)).is_err());

        assert_eq!(board.select_wrath_target(Coord::new(1, 1)), Ok(false));
        assert!(board.select_wrath_target(Coord::new(1, 1)).is_err());
        assert_eq!(board.select_wrath_target(Coord::new(1, 2)), Ok(false));
        assert_eq!(board.select_wrath_target(Coord::new(1, 3)), Ok(true));
        assert!(board.cell_at(1, 2).unwrap().is_wrath_selected());

        board.reset_wrath_targets();
        assert!(board.is_wrath_mode_active());
        assert!(!board.cell_at(1, 2).unwrap().is_wrath_selected());
        assert_eq!(board.wrath_selection().map(WrathSelection::remaining), Some(3));

        board.finish_wrath();
        assert!(!board.is_wrath_mode_active());
    }

    #[test]
    fn test_collapse_selection_allows_occupied() {
        let mut board = board();
        board
            .place_worker(PlayerId::new(1), 0, Coord::new(2, 2))
            .unwrap();
        board
            .enter_wrath_selection(PlayerId::new(0), WrathKind::Collapse)
            .unwrap();
        assert_eq!(board.select_wrath_target(Coord::new(2, 2)), Ok(false));
    }

    #[test]
    fn test_cancel_wrath() {
        let mut board = board();
        assert!(board.cancel_wrath().is_err());
        board
            .enter_wrath_selection(PlayerId::new(0), WrathKind::PushAndFlood)
            .unwrap();
        let selection = board.cancel_wrath().unwrap();
        assert_eq!(selection.owner(), PlayerId::new(0));
        assert!(!board.is_wrath_mode_active());
    }
}
