//! Demeter: one extra build, on a different cell than the first.

use tracing::debug;

use super::card::{ExtraAction, PowerContext};
use crate::board::{Board, Coord};
use crate::rules::legality::{buildable_targets, can_build_on, is_adjacent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Demeter {
    pub(crate) awaiting: bool,
    first_build: Option<Coord>,
}

impl Demeter {
    fn excluded(&self, ctx: &PowerContext) -> Option<Coord> {
        self.first_build.or(ctx.last_built)
    }

    pub(crate) fn targets(&self, board: &Board, ctx: &PowerContext) -> Vec<Coord> {
        let Some(worker) = ctx.worker(board) else {
            return Vec::new();
        };
        let excluded = self.excluded(ctx);
        buildable_targets(board, worker)
            .into_iter()
            .filter(|&c| Some(c) != excluded)
            .collect()
    }

    pub(crate) fn arm(&mut self, ctx: &PowerContext) {
        self.awaiting = true;
        self.first_build = ctx.last_built;
        debug!(first_build = ?self.first_build, "Demeter: second build armed");
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
        let position = ctx.worker(board)?.position();
        if !is_adjacent(position, target) || !can_build_on(board, target) {
            return None;
        }

        if !board.build(target) {
            return None;
        }
        self.awaiting = false;
        debug!(at = %target, "Demeter: second build");
        Some(ExtraAction::Built { at: target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn setup() -> (Board, PowerContext) {
        let mut board = Board::new(5, 5, true);
        let worker = board
            .place_worker(PlayerId::new(0), 0, Coord::new(2, 2))
            .unwrap();
        board.build(Coord::new(1, 2));
        let ctx = PowerContext {
            worker,
            move_origin: Some(Coord::new(2, 1)),
            last_built: Some(Coord::new(1, 2)),
        };
        (board, ctx)
    }

    #[test]
    fn test_cannot_build_twice_on_same_cell() {
        let (mut board, ctx) = setup();
        let mut demeter = Demeter::default();
        demeter.arm(&ctx);

        assert!(!demeter.targets(&board, &ctx).contains(&Coord::new(1, 2)));
        assert_eq!(demeter.perform(&mut board, &ctx, Coord::new(1, 2)), None);
        assert_eq!(board.cell(Coord::new(1, 2)).map(|c| c.level()), Some(1));
        assert!(demeter.awaiting);
    }

    #[test]
    fn test_second_build() {
        let (mut board, ctx) = setup();
        let mut demeter = Demeter::default();
        demeter.arm(&ctx);

        assert_eq!(
            demeter.perform(&mut board, &ctx, Coord::new(3, 3)),
            Some(ExtraAction::Built { at: Coord::new(3, 3) })
        );
        assert_eq!(board.cell(Coord::new(3, 3)).map(|c| c.level()), Some(1));
        assert!(!demeter.awaiting);
    }

    #[test]
    fn test_second_build_respects_terrain() {
        let (mut board, ctx) = setup();
        board.cell_mut(Coord::new(3, 3)).unwrap().flood();

        let mut demeter = Demeter::default();
        demeter.arm(&ctx);
        assert_eq!(demeter.perform(&mut board, &ctx, Coord::new(3, 3)), None);
        assert_eq!(demeter.perform(&mut board, &ctx, Coord::new(0, 0)), None);
    }
}
