//! Events reported back to the presentation layer.
//!
//! Every accepted action returns the events it caused, in order. Most
//! actions cause one or two, so they travel in a `SmallVec`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Coord, WorkerId};
use crate::core::{ActionError, PlayerId, WrathFailure};
use crate::gods::{ExtraAction, GodName};
use crate::rules::WinReason;
use crate::wrath::{WrathKind, WrathReport};

/// Something that happened as the result of an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WorkerSelected {
        worker: WorkerId,
        at: Coord,
    },
    WorkerMoved {
        worker: WorkerId,
        from: Coord,
        to: Coord,
    },
    Built {
        at: Coord,
        level: u8,
        dome: bool,
    },
    PowerArmed {
        god: GodName,
        targets: Vec<Coord>,
    },
    PowerUsed {
        god: GodName,
        action: ExtraAction,
    },
    /// The power was used up or skipped for this turn.
    PowerResolved {
        god: GodName,
    },
    WrathArmed {
        god: GodName,
        kind: WrathKind,
        required: usize,
    },
    WrathTargetSelected {
        at: Coord,
        remaining: usize,
    },
    WrathResolved(WrathReport),
    /// The wrath found nothing to act on; pick new targets.
    WrathFailed(WrathFailure),
    WrathCancelled,
    TurnEnded {
        next: PlayerId,
        turn: u32,
    },
    GameWon {
        winner: PlayerId,
        reason: WinReason,
    },
}

/// Events from one action.
pub type Events = SmallVec<[GameEvent; 2]>;

/// Outcome of applying one action.
pub type ActionResult = Result<Events, ActionError>;
