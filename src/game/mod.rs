//! The game aggregate and its turn controller.
//!
//! `Game` owns everything: board, players, turn state, RNG, winner and
//! action history. Front ends feed it one [`Action`] at a time through
//! [`Game::apply`] (or the per-action shorthands) and read back the
//! [`Events`] plus whatever queries they need to redraw.
//!
//! ## Turn structure
//!
//! 1. **Move**: click an own worker, then a highlighted destination
//! 2. **Build**: click a highlighted cell next to the moved worker
//! 3. **God power**: use or skip the god's extra action in its phase
//!
//! The turn passes to the opponent as soon as all three are settled.
//! A wrath selection can be armed at any point of the current player's
//! turn and intercepts cell clicks until it resolves or is cancelled.

mod clock;
mod controller;
mod events;
mod setup;
mod turn;

pub use clock::{TurnClock, DEFAULT_TURN_BUDGET};
pub use events::{ActionResult, Events, GameEvent};
pub use turn::{Phase, TurnState};

use im::Vector;

use crate::board::{Board, Worker};
use crate::core::{Action, ActionRecord, GameRng, Player, PlayerId, PlayerMap};
use crate::gods::PowerContext;
use crate::rules::{GameResult, RulesEngine};

/// A two-player game in progress.
///
/// Cloning is cheap enough for dry runs: the board is small and the
/// history is a persistent vector.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: PlayerMap<Player>,
    turn: TurnState,
    rng: GameRng,
    result: Option<GameResult>,
    history: Vector<ActionRecord>,
}

impl Game {
    // === Queries ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.try_get(id)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup (tiers, seals, floods).
    ///
    /// Bypasses every rule: tiers may drop and cells may be sealed or
    /// flooded outside a wrath. Not for play.
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.map(|r| r.winner)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.turn.moved
    }

    #[must_use]
    pub fn has_built(&self) -> bool {
        self.turn.built
    }

    #[must_use]
    pub fn is_god_power_resolved(&self) -> bool {
        self.turn.god_power_resolved
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase()
    }

    /// Current turn number (1-based).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn.number
    }

    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The worker picked this turn, if any.
    #[must_use]
    pub fn active_worker(&self) -> Option<&Worker> {
        self.turn.active_worker.and_then(|id| self.board.worker(id))
    }

    fn power_context(&self) -> Option<PowerContext> {
        self.turn.active_worker.map(|worker| PowerContext {
            worker,
            move_origin: self.turn.move_origin,
            last_built: self.turn.last_built,
        })
    }
}

impl RulesEngine for Game {
    fn candidate_actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .board
            .cells()
            .map(|cell| Action::select(cell.coord().row, cell.coord().col))
            .collect();
        actions.extend([
            Action::UseGodPower,
            Action::SkipGodPower,
            Action::UseGodWrath,
            Action::CancelWrath,
            Action::EndTurn,
        ]);
        actions
    }

    fn apply_action(&mut self, action: Action) -> ActionResult {
        self.apply(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result
    }
}
