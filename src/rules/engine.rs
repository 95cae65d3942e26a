//! Rules engine trait.
//!
//! `RulesEngine` is the seam front ends, bots and tests drive a game
//! through:
//! - What actions could be tried
//! - Which of them are legal right now
//! - How an action changes the game
//! - Whether the game is over

use serde::{Deserialize, Serialize};

use crate::core::{Action, PlayerId};
use crate::game::ActionResult;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A worker moved up onto a tier-3 cell.
    ReachedTopTier,
    /// The opponent could not move at the start of their turn, or could
    /// not build after moving.
    OpponentStuck,
    /// The opponent's clock ran out.
    OpponentTimedOut,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `candidate_actions`: a superset of the legal actions; cheap to list
/// - `apply_action`: must leave the state untouched when it returns `Err`
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine: Clone {
    /// Every action worth trying in the current state.
    fn candidate_actions(&self) -> Vec<Action>;

    /// Apply one action for the current player.
    fn apply_action(&mut self, action: Action) -> ActionResult;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate the actions that would currently be accepted.
    ///
    /// Default implementation dry-runs each candidate on a clone.
    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal().is_some() {
            return Vec::new();
        }
        self.candidate_actions()
            .into_iter()
            .filter(|&action| self.clone().apply_action(action).is_ok())
            .collect()
    }
}
