//! Action representation: the discrete inputs the engine consumes.
//!
//! Every input the presentation layer can produce maps onto one `Action`:
//! a cell click, a power/wrath command, an explicit end of turn, or a
//! timeout raised by the turn clock. The controller applies exactly one
//! action at a time.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single discrete game input.
///
/// ## Example
///
/// ```
/// use santorini_wrath::core::{Action, PlayerId};
///
/// let click = Action::select(2, 3);
/// assert!(click.is_cell_click());
///
/// let timeout = Action::Timeout { player: PlayerId::new(1), turn: 4 };
/// assert!(!timeout.is_cell_click());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select or act on the cell at `(row, col)`.
    SelectCell { row: i32, col: i32 },
    /// Arm the active god's extra action.
    UseGodPower,
    /// Decline the active god's extra action.
    SkipGodPower,
    /// Arm the active god's once-per-game wrath.
    UseGodWrath,
    /// Abandon a pending wrath selection without spending the wrath.
    CancelWrath,
    /// End the turn once move, build and power are all resolved.
    EndTurn,
    /// The turn clock ran out for `player` during turn `turn`.
    Timeout { player: PlayerId, turn: u32 },
}

impl Action {
    /// Shorthand for a cell click.
    #[must_use]
    pub const fn select(row: i32, col: i32) -> Self {
        Action::SelectCell { row, col }
    }

    /// Check if this action targets a cell.
    #[must_use]
    pub fn is_cell_click(&self) -> bool {
        matches!(self, Action::SelectCell { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectCell { row, col } => write!(f, "select ({row},{col})"),
            Action::UseGodPower => write!(f, "use god power"),
            Action::SkipGodPower => write!(f, "skip god power"),
            Action::UseGodWrath => write!(f, "use god wrath"),
            Action::CancelWrath => write!(f, "cancel wrath"),
            Action::EndTurn => write!(f, "end turn"),
            Action::Timeout { player, turn } => write!(f, "timeout for {player} on turn {turn}"),
        }
    }
}

/// An applied action with metadata for history tracking.
///
/// Only actions that were accepted are recorded, so replaying a history
/// against a game built from the same config reproduces the same state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
