//! Error types.
//!
//! Nothing in the engine is fatal. An `ActionError` means the action was
//! ignored and no state changed; the message is suitable for a status bar.
//! A `WrathFailure` is not an error of the caller: the wrath selection was
//! consumed but its effect found nothing to act on, so the selection is
//! cleared and the wrath stays armed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Coord;
use crate::core::player::PlayerId;
use crate::gods::GodName;

/// Why an action was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,

    #[error("cell ({row},{col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("select one of your own workers first")]
    NoWorkerSelected,

    #[error("illegal move to {0}")]
    IllegalMove(Coord),

    #[error("illegal build on {0}")]
    IllegalBuild(Coord),

    #[error("{0} is not a valid target for the pending god power")]
    IllegalExtraAction(Coord),

    #[error("nothing to do on {0} in this phase")]
    NothingToDo(Coord),

    #[error("you must move before using {0}'s power")]
    MustMoveFirst(GodName),

    #[error("you must build before using {0}'s power")]
    MustBuildFirst(GodName),

    #[error("the god power was already used or skipped this turn")]
    PowerAlreadyResolved,

    #[error("{0}'s power is already waiting for a target")]
    PowerAlreadyArmed(GodName),

    #[error("{0}'s power is not available right now")]
    PowerUnavailable(GodName),

    #[error("there is no god power to skip")]
    NothingToSkip,

    #[error("move, build, and use or skip the god power before ending the turn")]
    TurnIncomplete,

    #[error("this board does not support wrath")]
    WrathUnsupported,

    #[error("{0}'s wrath has already been used")]
    WrathExhausted(GodName),

    #[error("a wrath selection is already in progress")]
    WrathPending,

    #[error("no wrath selection is in progress")]
    NoWrathPending,

    #[error("{0} cannot be selected for wrath")]
    InvalidWrathTarget(Coord),

    #[error("stale timeout for {player} on turn {turn}")]
    StaleTimeout { player: PlayerId, turn: u32 },
}

/// Why a fully selected wrath had no effect.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrathFailure {
    #[error("wrath needs exactly {required} targets, got {selected}")]
    WrongTargetCount { required: usize, selected: usize },

    #[error("none of the selected cells could be sealed")]
    NothingToSeal,

    #[error("every selected cell is already at ground level")]
    NothingToCollapse,

    #[error("{0} does not hold an opponent's worker")]
    NoOpponentWorker(Coord),

    #[error("the worker on {0} has nowhere to be pushed")]
    NoPushDestination(Coord),
}

/// Invalid game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("expected exactly {expected} players, got {got}")]
    PlayerCount { expected: usize, got: usize },

    #[error("both players were assigned {0}")]
    DuplicateGod(GodName),

    #[error("a {rows}x{cols} board cannot hold four workers")]
    BoardTooSmall { rows: i32, cols: i32 },

    #[error("worker placement {0} is off the board or already taken")]
    InvalidPlacement(Coord),

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("expected {expected} worker placements, got {got}")]
    PlacementCount { expected: usize, got: usize },
}
