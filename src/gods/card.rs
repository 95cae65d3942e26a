//! `GodCard`: a god plus its per-turn power state and wrath flag.

use serde::{Deserialize, Serialize};

use super::artemis::Artemis;
use super::demeter::Demeter;
use super::triton::Triton;
use super::{GodName, PowerPhase};
use crate::board::{Board, Coord, HighlightKind, Worker, WorkerId};

/// What the power needs to know about the turn so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerContext {
    /// The worker that moved this turn.
    pub worker: WorkerId,
    /// Where that worker started the turn.
    pub move_origin: Option<Coord>,
    /// The most recent build this turn.
    pub last_built: Option<Coord>,
}

impl PowerContext {
    pub(crate) fn worker<'b>(&self, board: &'b Board) -> Option<&'b Worker> {
        board.worker(self.worker)
    }
}

/// Returned when a power is armed: the cells the next click may target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerHint {
    pub kind: HighlightKind,
    pub targets: Vec<Coord>,
}

/// An extra action a power carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraAction {
    Moved {
        from: Coord,
        to: Coord,
        reached_top: bool,
        /// The power stays armed for another move.
        again: bool,
    },
    Built {
        at: Coord,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GodPower {
    Artemis(Artemis),
    Demeter(Demeter),
    Triton(Triton),
}

/// A player's god.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GodCard {
    power: GodPower,
    wrath_used: bool,
}

impl GodCard {
    #[must_use]
    pub fn new(name: GodName) -> Self {
        let power = match name {
            GodName::Artemis => GodPower::Artemis(Artemis::default()),
            GodName::Demeter => GodPower::Demeter(Demeter::default()),
            GodName::Triton => GodPower::Triton(Triton::default()),
        };
        Self {
            power,
            wrath_used: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> GodName {
        match self.power {
            GodPower::Artemis(_) => GodName::Artemis,
            GodPower::Demeter(_) => GodName::Demeter,
            GodPower::Triton(_) => GodName::Triton,
        }
    }

    #[must_use]
    pub fn power_phase(&self) -> PowerPhase {
        self.name().power_phase()
    }

    #[must_use]
    pub fn is_repeatable_move_god(&self) -> bool {
        self.name().is_repeatable_move_god()
    }

    // === Power ===

    /// Whether the power may be armed now.
    #[must_use]
    pub fn available_god_power(&self, board: &Board, ctx: &PowerContext) -> bool {
        match &self.power {
            GodPower::Artemis(_) | GodPower::Demeter(_) => true,
            GodPower::Triton(t) => t.is_available(board, ctx),
        }
    }

    /// Cells the armed (or about to be armed) power could act on.
    #[must_use]
    pub fn eligible_targets(&self, board: &Board, ctx: &PowerContext) -> Vec<Coord> {
        match &self.power {
            GodPower::Artemis(a) => a.targets(board, ctx),
            GodPower::Demeter(d) => d.targets(board, ctx),
            GodPower::Triton(t) => t.targets(board, ctx),
        }
    }

    /// Arm the power. Returns `None`, leaving nothing armed, when the
    /// power is unavailable or has no eligible target.
    pub fn activate_god_power(&mut self, board: &Board, ctx: &PowerContext) -> Option<PowerHint> {
        if !self.available_god_power(board, ctx) {
            return None;
        }
        let targets = self.eligible_targets(board, ctx);
        if targets.is_empty() {
            return None;
        }

        match &mut self.power {
            GodPower::Artemis(a) => a.arm(ctx),
            GodPower::Demeter(d) => d.arm(ctx),
            GodPower::Triton(t) => t.arm(),
        }
        let kind = match self.power_phase() {
            PowerPhase::Move => HighlightKind::Move,
            PowerPhase::Build => HighlightKind::Build,
        };
        Some(PowerHint { kind, targets })
    }

    /// True while an extra action is armed and waiting for a target.
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        match &self.power {
            GodPower::Artemis(a) => a.awaiting,
            GodPower::Demeter(d) => d.awaiting,
            GodPower::Triton(t) => t.awaiting,
        }
    }

    /// Carry out the armed extra action on `target`.
    ///
    /// `None` means the target was not eligible and nothing changed.
    pub fn perform_extra_action(
        &mut self,
        board: &mut Board,
        ctx: &PowerContext,
        target: Coord,
    ) -> Option<ExtraAction> {
        match &mut self.power {
            GodPower::Artemis(a) => a.perform(board, ctx, target),
            GodPower::Demeter(d) => d.perform(board, ctx, target),
            GodPower::Triton(t) => t.perform(board, ctx, target),
        }
    }

    /// Disarm and forget this turn's power state.
    pub fn reset_turn_state(&mut self) {
        match &mut self.power {
            GodPower::Artemis(a) => *a = Artemis::default(),
            GodPower::Demeter(d) => *d = Demeter::default(),
            GodPower::Triton(t) => *t = Triton::default(),
        }
    }

    // === Wrath ===

    #[must_use]
    pub fn wrath_used(&self) -> bool {
        self.wrath_used
    }

    #[must_use]
    pub fn can_use_wrath(&self) -> bool {
        !self.wrath_used
    }

    pub(crate) fn mark_wrath_used(&mut self) {
        self.wrath_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn board_with_worker(at: Coord) -> (Board, PowerContext) {
        let mut board = Board::new(5, 5, true);
        let worker = board.place_worker(PlayerId::new(0), 0, at).unwrap();
        let ctx = PowerContext {
            worker,
            move_origin: None,
            last_built: None,
        };
        (board, ctx)
    }

    #[test]
    fn test_new_card() {
        let card = GodCard::new(GodName::Demeter);
        assert_eq!(card.name(), GodName::Demeter);
        assert_eq!(card.power_phase(), PowerPhase::Build);
        assert!(!card.is_awaiting());
        assert!(card.can_use_wrath());
    }

    #[test]
    fn test_wrath_flag_is_sticky() {
        let mut card = GodCard::new(GodName::Triton);
        card.mark_wrath_used();
        card.reset_turn_state();
        assert!(card.wrath_used());
        assert!(!card.can_use_wrath());
    }

    #[test]
    fn test_activation_reports_hint() {
        let (board, mut ctx) = board_with_worker(Coord::new(2, 2));
        ctx.move_origin = Some(Coord::new(1, 1));

        let mut card = GodCard::new(GodName::Artemis);
        let hint = card.activate_god_power(&board, &ctx).unwrap();

        assert_eq!(hint.kind, HighlightKind::Move);
        assert_eq!(hint.targets.len(), 7);
        assert!(!hint.targets.contains(&Coord::new(1, 1)));
        assert!(card.is_awaiting());

        card.reset_turn_state();
        assert!(!card.is_awaiting());
    }

    #[test]
    fn test_activation_without_targets_arms_nothing() {
        let (mut board, ctx) = board_with_worker(Coord::new(0, 0));
        for c in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)] {
            board.set_level(c, 3);
            board.build(c);
        }

        let mut card = GodCard::new(GodName::Demeter);
        assert!(card.available_god_power(&board, &ctx));
        assert!(card.activate_god_power(&board, &ctx).is_none());
        assert!(!card.is_awaiting());
    }
}
