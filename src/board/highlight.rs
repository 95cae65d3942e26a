//! Cell marks for the presentation layer.
//!
//! The controller recomputes marks after every accepted action: the
//! acting worker's cell is `Selected`, and every cell the next click may
//! act on is `Highlighted` with the matching `HighlightKind`. Marks never
//! feed back into rule checks.

use super::cell::{HighlightKind, Selection};
use super::coord::Coord;
use super::grid::Board;

impl Board {
    /// Reset every cell's selection and highlight.
    pub(crate) fn clear_markings(&mut self) {
        for cell in self.cells_mut() {
            cell.mark(Selection::None, HighlightKind::None);
        }
    }

    /// Clear all marks, then select `center` and highlight `targets`.
    pub(crate) fn highlight_targets(&mut self, center: Coord, kind: HighlightKind, targets: &[Coord]) {
        self.select_only(center);
        for &target in targets {
            if let Some(cell) = self.cell_mut(target) {
                cell.mark(Selection::Highlighted, kind);
            }
        }
    }

    /// Clear all marks and select `center` alone.
    pub(crate) fn select_only(&mut self, center: Coord) {
        self.clear_markings();
        if let Some(cell) = self.cell_mut(center) {
            cell.mark(Selection::Selected, HighlightKind::None);
        }
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.cells()
            .find(|c| c.selection() == Selection::Selected)
            .map(|c| c.coord())
    }

    /// Cells currently highlighted, row-major.
    #[must_use]
    pub fn highlighted(&self) -> Vec<Coord> {
        self.cells()
            .filter(|c| c.selection() == Selection::Highlighted)
            .map(|c| c.coord())
            .collect()
    }
}
