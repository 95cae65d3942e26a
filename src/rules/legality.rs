//! Movement and build legality.
//!
//! Pure predicates over the board: nothing here mutates state.
//!
//! - A worker may step onto an adjacent cell that is not sealed, not
//!   flooded (Triton wades through floods), unoccupied, dome-free and at
//!   most one tier higher than where it stands.
//! - A worker may build on an adjacent cell that is not sealed, not
//!   flooded (no exemptions), unoccupied and dome-free.

use crate::board::{Board, Coord, Worker};
use crate::gods::GodName;

/// Chebyshev distance of exactly one: the eight surrounding cells.
#[must_use]
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    a.is_adjacent(b)
}

/// Check whether `worker` may move onto `dest`.
///
/// Adjacency is not checked here; see [`movable_targets`].
#[must_use]
pub fn can_move_to(board: &Board, worker: &Worker, god: GodName, dest: Coord) -> bool {
    let (Some(origin), Some(target)) = (board.cell(worker.position()), board.cell(dest)) else {
        return false;
    };

    !target.is_sealed()
        && (god.ignores_floods() || !target.is_flooded())
        && !target.is_occupied()
        && !target.has_dome()
        && target.level() <= origin.level() + 1
}

/// Check whether a build on `dest` is allowed.
///
/// Adjacency is not checked here; see [`buildable_targets`].
#[must_use]
pub fn can_build_on(board: &Board, dest: Coord) -> bool {
    board.cell(dest).is_some_and(|cell| {
        !cell.is_sealed() && !cell.is_flooded() && !cell.is_occupied() && !cell.has_dome()
    })
}

/// True iff any in-bounds neighbour of `center` satisfies `predicate`.
pub fn has_any_adjacent_action(
    board: &Board,
    center: Coord,
    mut predicate: impl FnMut(Coord) -> bool,
) -> bool {
    board.neighbors(center).any(|c| predicate(c))
}

/// Adjacent cells `worker` may move to, in direction order.
#[must_use]
pub fn movable_targets(board: &Board, worker: &Worker, god: GodName) -> Vec<Coord> {
    board
        .neighbors(worker.position())
        .filter(|&c| can_move_to(board, worker, god, c))
        .collect()
}

/// Adjacent cells `worker` may build on, in direction order.
#[must_use]
pub fn buildable_targets(board: &Board, worker: &Worker) -> Vec<Coord> {
    board
        .neighbors(worker.position())
        .filter(|&c| can_build_on(board, c))
        .collect()
}

/// True if `worker` has at least one legal move.
#[must_use]
pub fn can_move_anywhere(board: &Board, worker: &Worker, god: GodName) -> bool {
    has_any_adjacent_action(board, worker.position(), |c| can_move_to(board, worker, god, c))
}

/// True if `worker` has at least one legal build.
#[must_use]
pub fn can_build_anywhere(board: &Board, worker: &Worker) -> bool {
    has_any_adjacent_action(board, worker.position(), |c| can_build_on(board, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::WorkerId;
    use crate::core::PlayerId;

    fn setup() -> (Board, WorkerId) {
        let mut board = Board::new(5, 5, true);
        let id = board
            .place_worker(PlayerId::new(0), 0, Coord::new(2, 2))
            .unwrap();
        (board, id)
    }

    fn worker(board: &Board, id: WorkerId) -> Worker {
        *board.worker(id).unwrap()
    }

    #[test]
    fn test_adjacency_includes_diagonals() {
        let c = Coord::new(2, 2);
        assert!(is_adjacent(c, Coord::new(1, 1)));
        assert!(is_adjacent(c, Coord::new(3, 2)));
        assert!(!is_adjacent(c, c));
        assert!(!is_adjacent(c, Coord::new(4, 2)));
    }

    #[test]
    fn test_climb_at_most_one() {
        let (mut board, id) = setup();
        board.set_level(Coord::new(2, 3), 1);
        board.set_level(Coord::new(2, 1), 2);

        let w = worker(&board, id);
        assert!(can_move_to(&board, &w, GodName::Artemis, Coord::new(2, 3)));
        assert!(!can_move_to(&board, &w, GodName::Artemis, Coord::new(2, 1)));
    }

    #[test]
    fn test_descend_any_amount() {
        let (mut board, id) = setup();
        board.set_level(Coord::new(2, 2), 3);
        let w = worker(&board, id);
        assert!(can_move_to(&board, &w, GodName::Demeter, Coord::new(1, 1)));
    }

    #[test]
    fn test_domes_and_occupants_block() {
        let (mut board, id) = setup();
        board.set_level(Coord::new(1, 2), 3);
        board.build(Coord::new(1, 2));
        board
            .place_worker(PlayerId::new(1), 0, Coord::new(3, 2))
            .unwrap();

        let w = worker(&board, id);
        assert!(!can_move_to(&board, &w, GodName::Artemis, Coord::new(1, 2)));
        assert!(!can_move_to(&board, &w, GodName::Artemis, Coord::new(3, 2)));
        assert!(!can_build_on(&board, Coord::new(1, 2)));
        assert!(!can_build_on(&board, Coord::new(3, 2)));
    }

    #[test]
    fn test_seal_blocks_everyone() {
        let (mut board, id) = setup();
        board.cell_mut(Coord::new(1, 1)).unwrap().seal();

        let w = worker(&board, id);
        for god in GodName::ALL {
            assert!(!can_move_to(&board, &w, god, Coord::new(1, 1)));
        }
        assert!(!can_build_on(&board, Coord::new(1, 1)));
    }

    #[test]
    fn test_flood_blocks_all_but_triton_movement() {
        let (mut board, id) = setup();
        board.cell_mut(Coord::new(1, 1)).unwrap().flood();

        let w = worker(&board, id);
        assert!(can_move_to(&board, &w, GodName::Triton, Coord::new(1, 1)));
        assert!(!can_move_to(&board, &w, GodName::Artemis, Coord::new(1, 1)));
        assert!(!can_move_to(&board, &w, GodName::Demeter, Coord::new(1, 1)));
        assert!(!can_build_on(&board, Coord::new(1, 1)));
    }

    #[test]
    fn test_off_board_is_never_legal() {
        let (board, id) = setup();
        let w = worker(&board, id);
        assert!(!can_move_to(&board, &w, GodName::Artemis, Coord::new(-1, 2)));
        assert!(!can_build_on(&board, Coord::new(5, 5)));
    }

    #[test]
    fn test_targets_and_stuck_detection() {
        let mut board = Board::new(5, 5, true);
        let id = board
            .place_worker(PlayerId::new(0), 0, Coord::new(0, 0))
            .unwrap();
        let w = worker(&board, id);
        assert_eq!(movable_targets(&board, &w, GodName::Artemis).len(), 3);
        assert_eq!(buildable_targets(&board, &w).len(), 3);

        for c in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)] {
            board.set_level(c, 3);
            board.build(c);
        }
        let w = worker(&board, id);
        assert!(!can_move_anywhere(&board, &w, GodName::Triton));
        assert!(!can_build_anywhere(&board, &w));
    }
}
