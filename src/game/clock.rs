//! Chess-style turn clock.
//!
//! Each player has one budget for the whole game. The caller reports
//! elapsed time with [`TurnClock::tick`]; only the running player's budget
//! drains. When it hits zero the clock hands back the `Timeout` action to
//! feed into [`Game::apply`](super::Game::apply), once per turn. A timeout
//! the game rejects as stale does not silence later turns.

use std::time::Duration;

use tracing::warn;

use super::Game;
use crate::core::{Action, PlayerId, PlayerMap};

/// Budget each player starts with.
pub const DEFAULT_TURN_BUDGET: Duration = Duration::from_secs(5 * 60);

/// Per-player time budgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnClock {
    remaining: PlayerMap<Duration>,
    running: Option<(PlayerId, u32)>,
    /// Turn for which a timeout was last handed out.
    fired: Option<(PlayerId, u32)>,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_BUDGET)
    }
}

impl TurnClock {
    /// Both players start with `budget`. Nothing runs until
    /// [`start_turn`](Self::start_turn).
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            remaining: PlayerMap::with_value(budget),
            running: None,
            fired: None,
        }
    }

    /// Budget left for `player`; zero for an id outside the two seats.
    #[must_use]
    pub fn remaining(&self, player: PlayerId) -> Duration {
        self.remaining
            .try_get(player)
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// The player whose budget is draining, and their turn number.
    #[must_use]
    pub fn running(&self) -> Option<(PlayerId, u32)> {
        self.running
    }

    /// Switch the clock to `player` for turn `turn`.
    pub fn start_turn(&mut self, player: PlayerId, turn: u32) {
        self.running = Some((player, turn));
    }

    /// Follow the game: run the current player's budget, or stop once
    /// the game is over.
    pub fn sync(&mut self, game: &Game) {
        if game.is_over() {
            self.pause();
        } else if self.running != Some((game.current_player(), game.turn())) {
            self.start_turn(game.current_player(), game.turn());
        }
    }

    /// Stop draining any budget.
    pub fn pause(&mut self) {
        self.running = None;
    }

    /// Drain `elapsed` from the running budget.
    ///
    /// Returns the timeout action the first time the running budget is
    /// found empty during a turn. An empty budget fires again on the
    /// same player's next turn.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Action> {
        let (player, turn) = self.running?;
        let budget = self.remaining.try_get_mut(player)?;
        let left = budget.saturating_sub(elapsed);
        *budget = left;

        if left.is_zero() && self.fired != Some((player, turn)) {
            self.fired = Some((player, turn));
            warn!(%player, turn, "turn clock expired");
            return Some(Action::Timeout { player, turn });
        }
        None
    }
}
