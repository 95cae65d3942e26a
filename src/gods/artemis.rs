//! Artemis: one extra move for the worker that already moved, but not
//! back to the cell it started the turn on.

use tracing::debug;

use super::card::{ExtraAction, PowerContext};
use super::GodName;
use crate::board::{Board, Coord};
use crate::rules::legality::{can_move_to, is_adjacent, movable_targets};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Artemis {
    pub(crate) awaiting: bool,
    origin: Option<Coord>,
}

impl Artemis {
    fn excluded(&self, ctx: &PowerContext) -> Option<Coord> {
        self.origin.or(ctx.move_origin)
    }

    pub(crate) fn targets(&self, board: &Board, ctx: &PowerContext) -> Vec<Coord> {
        let Some(worker) = ctx.worker(board) else {
            return Vec::new();
        };
        let excluded = self.excluded(ctx);
        movable_targets(board, worker, GodName::Artemis)
            .into_iter()
            .filter(|&c| Some(c) != excluded)
            .collect()
    }

    pub(crate) fn arm(&mut self, ctx: &PowerContext) {
        self.awaiting = true;
        self.origin = ctx.move_origin;
        debug!(origin = ?self.origin, "Artemis: second move armed");
    }

    pub(crate) fn perform(
        &mut self,
        board: &mut Board,
        ctx: &PowerContext,
        target: Coord,
    ) -> Option<ExtraAction> {
        if !self.awaiting || Some(target) == self.excluded(ctx) {
            return None;
        }
        let worker = *ctx.worker(board)?;
        let from = worker.position();
        if !is_adjacent(from, target) || !can_move_to(board, &worker, GodName::Artemis, target) {
            return None;
        }

        let reached_top = board.move_worker(worker.id(), target);
        self.awaiting = false;
        debug!(%from, to = %target, reached_top, "Artemis: second move");

        Some(ExtraAction::Moved {
            from,
            to: target,
            reached_top,
            again: false,
        })
    }
}
