//! Demeter's wrath: knock a tier off each target.

use super::{AffectedCells, WrathReport};
use crate::board::{Board, Coord};
use crate::core::WrathFailure;

pub(super) fn apply(board: &mut Board, targets: &[Coord]) -> Result<WrathReport, WrathFailure> {
    let mut collapsed = AffectedCells::new();
    for &coord in targets {
        if let Some(cell) = board.cell_mut(coord) {
            if cell.block_mut().collapse() {
                collapsed.push(coord);
            }
        }
    }

    if collapsed.is_empty() {
        Err(WrathFailure::NothingToCollapse)
    } else {
        Ok(WrathReport::Collapsed(collapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_raised_cells() {
        let mut board = Board::new(5, 5, true);
        board.set_level(Coord::new(0, 0), 2);
        board.set_level(Coord::new(1, 1), 1);

        let targets = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];
        let report = apply(&mut board, &targets).unwrap();

        assert_eq!(
            report,
            WrathReport::Collapsed(AffectedCells::from_slice(&[Coord::new(0, 0), Coord::new(1, 1)]))
        );
        assert_eq!(board.cell(Coord::new(0, 0)).unwrap().level(), 1);
        assert_eq!(board.cell(Coord::new(1, 1)).unwrap().level(), 0);
        assert_eq!(board.cell(Coord::new(2, 2)).unwrap().level(), 0);
    }

    #[test]
    fn test_ground_level_only_fails() {
        let mut board = Board::new(5, 5, true);
        let targets = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];
        assert_eq!(apply(&mut board, &targets), Err(WrathFailure::NothingToCollapse));
    }
}
