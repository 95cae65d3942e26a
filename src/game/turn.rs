//! Per-turn bookkeeping.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, WorkerId};
use crate::core::PlayerId;

/// Where the current player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No move yet.
    Move,
    /// Moved, not built.
    Build,
    /// Built, god power neither used nor skipped.
    GodPower,
    /// Everything done; the turn can end.
    TurnOver,
}

/// Flags and positions for the turn in progress.
///
/// Every transition replaces the whole value, so a rejected action can
/// never leave it half-updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub current: PlayerId,
    /// 1-based count of turns started this game.
    pub number: u32,
    pub moved: bool,
    pub built: bool,
    pub god_power_resolved: bool,
    /// The worker picked for this turn.
    pub active_worker: Option<WorkerId>,
    /// Where the moving worker started the turn.
    pub move_origin: Option<Coord>,
    pub last_moved: Option<Coord>,
    pub last_built: Option<Coord>,
}

impl TurnState {
    /// Fresh state for `current`'s turn number `number`.
    #[must_use]
    pub fn start(current: PlayerId, number: u32) -> Self {
        Self {
            current,
            number,
            moved: false,
            built: false,
            god_power_resolved: false,
            active_worker: None,
            move_origin: None,
            last_moved: None,
            last_built: None,
        }
    }

    /// The opponent's turn that follows this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::start(self.current.opponent(), self.number + 1)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.moved, self.built, self.god_power_resolved) {
            (false, _, _) => Phase::Move,
            (true, false, _) => Phase::Build,
            (true, true, false) => Phase::GodPower,
            (true, true, true) => Phase::TurnOver,
        }
    }

    /// Move, build and power are all settled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::TurnOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_progression() {
        let mut turn = TurnState::start(PlayerId::new(0), 1);
        assert_eq!(turn.phase(), Phase::Move);

        turn = TurnState { moved: true, ..turn };
        assert_eq!(turn.phase(), Phase::Build);

        // Skipping the power early does not skip the build.
        turn = TurnState { god_power_resolved: true, ..turn };
        assert_eq!(turn.phase(), Phase::Build);

        turn = TurnState { built: true, ..turn };
        assert_eq!(turn.phase(), Phase::TurnOver);
        assert!(turn.is_complete());

        let built_only = TurnState {
            moved: true,
            built: true,
            ..TurnState::start(PlayerId::new(0), 1)
        };
        assert_eq!(built_only.phase(), Phase::GodPower);
    }

    #[test]
    fn test_next_resets_everything() {
        let turn = TurnState {
            moved: true,
            built: true,
            god_power_resolved: true,
            active_worker: Some(WorkerId(1)),
            move_origin: Some(Coord::new(0, 0)),
            last_moved: Some(Coord::new(0, 1)),
            last_built: Some(Coord::new(1, 1)),
            ..TurnState::start(PlayerId::new(1), 6)
        };

        let next = turn.next();
        assert_eq!(next, TurnState::start(PlayerId::new(0), 7));
    }
}
