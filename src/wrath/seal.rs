//! Artemis's wrath: seal cells against all movement and building.

use super::{AffectedCells, WrathReport};
use crate::board::{Board, Coord};
use crate::core::WrathFailure;

pub(super) fn apply(board: &mut Board, targets: &[Coord]) -> Result<WrathReport, WrathFailure> {
    let mut sealed = AffectedCells::new();
    for &coord in targets {
        if let Some(cell) = board.cell_mut(coord) {
            if !cell.is_occupied() && !cell.is_sealed() {
                cell.seal();
                sealed.push(coord);
            }
        }
    }

    if sealed.is_empty() {
        Err(WrathFailure::NothingToSeal)
    } else {
        Ok(WrathReport::Sealed(sealed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_seals_only_fresh_cells() {
        let mut board = Board::new(5, 5, true);
        board.cell_mut(Coord::new(0, 0)).unwrap().seal();

        let targets = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];
        let report = apply(&mut board, &targets).unwrap();

        assert_eq!(
            report,
            WrathReport::Sealed(AffectedCells::from_slice(&[Coord::new(1, 1), Coord::new(2, 2)]))
        );
        assert!(targets.iter().all(|&c| board.cell(c).unwrap().is_sealed()));
    }

    #[test]
    fn test_occupied_cells_are_skipped() {
        let mut board = Board::new(5, 5, true);
        let (x, y, z) = (Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2));
        board.place_worker(PlayerId::new(1), 0, y).unwrap();

        let report = apply(&mut board, &[x, y, z]).unwrap();
        assert_eq!(report, WrathReport::Sealed(AffectedCells::from_slice(&[x, z])));
        assert!(!board.cell(y).unwrap().is_sealed());
    }

    #[test]
    fn test_all_already_sealed_fails() {
        let mut board = Board::new(5, 5, true);
        let targets = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];
        for &c in &targets {
            board.cell_mut(c).unwrap().seal();
        }
        assert_eq!(apply(&mut board, &targets), Err(WrathFailure::NothingToSeal));
    }
}
