//! Triton's wrath: push an opponent's worker one cell away, then flood
//! the cell they stood on and up to two random neighbours.

use tracing::debug;

use super::{AffectedCells, WrathReport};
use crate::board::{Board, Coord};
use crate::core::{GameRng, PlayerId, WrathFailure};

/// Most extra cells flooded around the vacated cell.
const EXTRA_FLOODS: usize = 2;

pub(super) fn apply(
    board: &mut Board,
    owner: PlayerId,
    target: Coord,
    rng: &mut GameRng,
) -> Result<WrathReport, WrathFailure> {
    let victim = board
        .worker_at(target)
        .filter(|w| w.owner() != owner)
        .map(|w| w.id())
        .ok_or(WrathFailure::NoOpponentWorker(target))?;

    let to = push_destination(board, target).ok_or(WrathFailure::NoPushDestination(target))?;
    board.move_worker(victim, to);
    debug!(from = %target, %to, "worker pushed");

    let mut flooded = AffectedCells::new();
    if let Some(cell) = board.cell_mut(target) {
        cell.flood();
        cell.seal();
        flooded.push(target);
    }

    let candidates: Vec<Coord> = board
        .neighbors(target)
        .filter(|&c| {
            board
                .cell(c)
                .is_some_and(|cell| !cell.is_occupied() && !cell.is_flooded())
        })
        .collect();
    for coord in rng.sample(&candidates, EXTRA_FLOODS) {
        if let Some(cell) = board.cell_mut(coord) {
            cell.flood();
            flooded.push(coord);
        }
    }

    Ok(WrathReport::PushedAndFlooded {
        from: target,
        to,
        flooded,
    })
}

/// First neighbour, in direction order, that can take the pushed worker
/// without it climbing.
fn push_destination(board: &Board, from: Coord) -> Option<Coord> {
    let origin_level = board.cell(from)?.level();
    board.neighbors(from).find(|&c| {
        board.cell(c).is_some_and(|cell| {
            !cell.is_occupied()
                && !cell.has_dome()
                && !cell.is_flooded()
                && !cell.is_sealed()
                && cell.level() <= origin_level
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Board {
        let mut board = Board::new(5, 5, true);
        board
            .place_worker(PlayerId::new(0), 0, Coord::new(4, 4))
            .unwrap();
        board
            .place_worker(PlayerId::new(1), 0, Coord::new(2, 2))
            .unwrap();
        board
    }

    #[test]
    fn test_push_uses_direction_order() {
        let mut board = setup();
        let mut rng = GameRng::new(3);
        // Block (1,1); the next direction is (1,2).
        board.cell_mut(Coord::new(1, 1)).unwrap().seal();

        let report = apply(&mut board, PlayerId::new(0), Coord::new(2, 2), &mut rng).unwrap();
        let WrathReport::PushedAndFlooded { from, to, flooded } = report else {
            panic!("unexpected report");
        };

        assert_eq!(from, Coord::new(2, 2));
        assert_eq!(to, Coord::new(1, 2));
        assert_eq!(flooded.len(), 3);
        assert_eq!(flooded[0], Coord::new(2, 2));

        let origin = board.cell(Coord::new(2, 2)).unwrap();
        assert!(origin.is_flooded() && origin.is_sealed() && !origin.is_occupied());
        assert!(board.worker_at(Coord::new(1, 2)).is_some());
        for c in &flooded[1..] {
            assert!(Coord::new(2, 2).is_adjacent(*c));
            assert_ne!(*c, Coord::new(1, 2));
        }
    }

    #[test]
    fn test_push_never_climbs() {
        let mut board = setup();
        let mut rng = GameRng::new(3);
        board.set_level(Coord::new(2, 2), 1);
        for c in board.neighbors(Coord::new(2, 2)).collect::<Vec<_>>() {
            board.set_level(c, 2);
        }
        board.set_level(Coord::new(3, 3), 1);

        let report = apply(&mut board, PlayerId::new(0), Coord::new(2, 2), &mut rng).unwrap();
        assert!(matches!(report, WrathReport::PushedAndFlooded { to, .. } if to == Coord::new(3, 3)));
    }

    #[test]
    fn test_own_or_empty_target_fails() {
        let mut board = setup();
        let mut rng = GameRng::new(3);
        assert_eq!(
            apply(&mut board, PlayerId::new(0), Coord::new(4, 4), &mut rng),
            Err(WrathFailure::NoOpponentWorker(Coord::new(4, 4)))
        );
        assert_eq!(
            apply(&mut board, PlayerId::new(0), Coord::new(0, 0), &mut rng),
            Err(WrathFailure::NoOpponentWorker(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_no_destination_fails_without_change() {
        let mut board = setup();
        let mut rng = GameRng::new(3);
        for c in board.neighbors(Coord::new(2, 2)).collect::<Vec<_>>() {
            board.cell_mut(c).unwrap().flood();
        }

        assert_eq!(
            apply(&mut board, PlayerId::new(0), Coord::new(2, 2), &mut rng),
            Err(WrathFailure::NoPushDestination(Coord::new(2, 2)))
        );
        let origin = board.cell(Coord::new(2, 2)).unwrap();
        assert!(origin.is_occupied() && !origin.is_flooded());
    }

    #[test]
    fn test_flood_candidates_skip_occupied() {
        let mut board = Board::new(5, 5, true);
        let mut rng = GameRng::new(11);
        board
            .place_worker(PlayerId::new(1), 0, Coord::new(0, 0))
            .unwrap();
        board
            .place_worker(PlayerId::new(1), 1, Coord::new(1, 1))
            .unwrap();

        // Only (0,1) and (1,0) remain free around (0,0); the push takes (0,1).
        let report = apply(&mut board, PlayerId::new(0), Coord::new(0, 0), &mut rng).unwrap();
        let WrathReport::PushedAndFlooded { to, flooded, .. } = report else {
            panic!("unexpected report");
        };
        assert_eq!(to, Coord::new(0, 1));
        assert_eq!(flooded.as_slice(), &[Coord::new(0, 0), Coord::new(1, 0)]);
    }
}
