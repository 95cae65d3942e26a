//! Wrath effects.
//!
//! A wrath is a once-per-game god ability. The board collects targets
//! through its wrath selection sub-state; once the selection is complete
//! `resolve` applies the owner's effect:
//!
//! | God     | Kind           | Targets | Effect                                   |
//! |---------|----------------|---------|------------------------------------------|
//! | Artemis | `Seal`         | 3       | seal every free, unsealed target         |
//! | Demeter | `Collapse`     | 3       | knock one tier off every raised target   |
//! | Triton  | `PushAndFlood` | 1       | push an opponent away, flood around them |
//!
//! On success the selection is disarmed. On failure the picked targets are
//! dropped and the selection stays armed for a new attempt.

mod collapse;
mod flood;
mod seal;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, warn};

use crate::board::{Board, Coord, WrathSelection};
use crate::core::{GameRng, WrathFailure};

/// Cells touched by a wrath.
pub type AffectedCells = SmallVec<[Coord; 3]>;

/// Which effect a wrath applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrathKind {
    Seal,
    Collapse,
    PushAndFlood,
}

impl WrathKind {
    /// Number of cells the player must pick.
    #[must_use]
    pub const fn required_targets(self) -> usize {
        match self {
            WrathKind::Seal | WrathKind::Collapse => 3,
            WrathKind::PushAndFlood => 1,
        }
    }

    /// Occupied cells cannot be picked.
    #[must_use]
    pub const fn requires_unoccupied(self) -> bool {
        matches!(self, WrathKind::Seal)
    }
}

/// What a successful wrath did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrathReport {
    Sealed(AffectedCells),
    Collapsed(AffectedCells),
    PushedAndFlooded {
        from: Coord,
        to: Coord,
        /// Every newly flooded cell; `from` comes first.
        flooded: AffectedCells,
    },
}

/// Apply a complete selection's effect to the board.
///
/// Does not touch the selection sub-state; see [`resolve`].
pub(crate) fn apply(
    board: &mut Board,
    selection: &WrathSelection,
    rng: &mut GameRng,
) -> Result<WrathReport, WrathFailure> {
    let targets = selection.targets();
    if targets.len() != selection.required() {
        return Err(WrathFailure::WrongTargetCount {
            required: selection.required(),
            selected: targets.len(),
        });
    }

    match selection.kind() {
        WrathKind::Seal => seal::apply(board, targets),
        WrathKind::Collapse => collapse::apply(board, targets),
        WrathKind::PushAndFlood => flood::apply(board, selection.owner(), targets[0], rng),
    }
}

/// Apply the armed selection if it is complete.
///
/// Returns `None` while more targets are needed. On success the board
/// leaves wrath mode; on failure the targets are cleared and the mode
/// stays armed.
pub(crate) fn resolve(board: &mut Board, rng: &mut GameRng) -> Option<Result<WrathReport, WrathFailure>> {
    let selection = board.wrath_selection().filter(|s| s.is_complete())?.clone();

    let outcome = apply(board, &selection, rng);
    match &outcome {
        Ok(report) => {
            board.finish_wrath();
            info!(owner = %selection.owner(), ?report, "wrath resolved");
        }
        Err(failure) => {
            board.reset_wrath_targets();
            warn!(owner = %selection.owner(), %failure, "wrath failed, selection cleared");
        }
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn armed(kind: WrathKind) -> Board {
        let mut board = Board::new(5, 5, true);
        board.enter_wrath_selection(PlayerId::new(0), kind).unwrap();
        board
    }

    #[test]
    fn test_incomplete_selection_does_nothing() {
        let mut board = armed(WrathKind::Collapse);
        let mut rng = GameRng::new(1);
        board.select_wrath_target(Coord::new(0, 0)).unwrap();

        assert!(resolve(&mut board, &mut rng).is_none());
        assert!(board.is_wrath_mode_active());
        assert_eq!(board.wrath_selection().map(|s| s.targets().len()), Some(1));
    }

    #[test]
    fn test_success_disarms() {
        let mut board = armed(WrathKind::Seal);
        let mut rng = GameRng::new(1);
        for c in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)] {
            board.select_wrath_target(c).unwrap();
        }

        let report = resolve(&mut board, &mut rng).unwrap().unwrap();
        assert!(matches!(report, WrathReport::Sealed(ref cells) if cells.len() == 3));
        assert!(!board.is_wrath_mode_active());
        assert!(board.cells().all(|c| !c.is_wrath_selected()));
    }

    #[test]
    fn test_failure_keeps_mode_armed() {
        let mut board = armed(WrathKind::Collapse);
        let mut rng = GameRng::new(1);
        for c in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)] {
            board.select_wrath_target(c).unwrap();
        }

        let outcome = resolve(&mut board, &mut rng).unwrap();
        assert_eq!(outcome, Err(WrathFailure::NothingToCollapse));
        assert!(board.is_wrath_mode_active());
        assert_eq!(board.wrath_selection().map(WrathSelection::remaining), Some(3));
        assert!(board.cells().all(|c| !c.is_wrath_selected()));
    }
}
