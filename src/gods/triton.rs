//! Triton: each move that lands on the perimeter may be followed by
//! another move. The chain ends on the first landing off the perimeter.

use tracing::debug;

use super::card::{ExtraAction, PowerContext};
use super::GodName;
use crate::board::{Board, Coord};
use crate::rules::legality::{can_move_anywhere, can_move_to, is_adjacent, movable_targets};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Triton {
    pub(crate) awaiting: bool,
}

impl Triton {
    pub(crate) fn is_available(&self, board: &Board, ctx: &PowerContext) -> bool {
        ctx.worker(board)
            .is_some_and(|w| board.is_perimeter(w.position()))
    }

    pub(crate) fn targets(&self, board: &Board, ctx: &PowerContext) -> Vec<Coord> {
        ctx.worker(board)
            .map(|w| movable_targets(board, w, GodName::Triton))
            .unwrap_or_default()
    }

    pub(crate) fn arm(&mut self) {
        self.awaiting = true;
        debug!("Triton: extra move armed");
    }

    pub(crate) fn perform(
        &mut self,
        board: &mut Board,
        ctx: &PowerContext,
        target: Coord,
    ) -> Option<ExtraAction> {
        if !self.awaiting {
            return None;
        }
        let worker = *ctx.worker(board)?;
        let from = worker.position();
        if !is_adjacent(from, target) || !can_move_to(board, &worker, GodName::Triton, target) {
            return None;
        }

        let reached_top = board.move_worker(worker.id(), target);
        let again = !reached_top
            && board.is_perimeter(target)
            && ctx
                .worker(board)
                .is_some_and(|w| can_move_anywhere(board, w, GodName::Triton));
        self.awaiting = again;
        debug!(%from, to = %target, reached_top, again, "Triton: extra move");

        Some(ExtraAction::Moved {
            from,
            to: target,
            reached_top,
            again,
        })
    }
}
