//! God cards.
//!
//! Each player holds one god. A god grants:
//! - a per-turn **power**: an optional extra move or build, usable in the
//!   god's `PowerPhase` once the regular action of that phase is done
//! - a once-per-game **wrath**: a multi-cell selection with a board-wide
//!   effect (see `crate::wrath`)
//!
//! The set of gods is closed; `GodCard` matches on it exhaustively.

mod artemis;
mod card;
mod demeter;
mod triton;

pub use card::{ExtraAction, GodCard, PowerContext, PowerHint};

use serde::{Deserialize, Serialize};

use crate::wrath::WrathKind;

/// The phase in which a god's power applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerPhase {
    /// Usable after the regular move, before building.
    Move,
    /// Usable after the regular build.
    Build,
}

/// Identity of a god.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GodName {
    Artemis,
    Demeter,
    Triton,
}

impl GodName {
    /// Every god, in menu order.
    pub const ALL: [GodName; 3] = [GodName::Artemis, GodName::Demeter, GodName::Triton];

    #[must_use]
    pub const fn power_phase(self) -> PowerPhase {
        match self {
            GodName::Artemis | GodName::Triton => PowerPhase::Move,
            GodName::Demeter => PowerPhase::Build,
        }
    }

    /// Triton's workers may step onto flooded cells.
    #[must_use]
    pub const fn ignores_floods(self) -> bool {
        matches!(self, GodName::Triton)
    }

    /// A move god whose extra move can chain more than once per turn.
    #[must_use]
    pub const fn is_repeatable_move_god(self) -> bool {
        matches!(self, GodName::Triton)
    }

    /// The wrath this god wields.
    #[must_use]
    pub const fn wrath_kind(self) -> WrathKind {
        match self {
            GodName::Artemis => WrathKind::Seal,
            GodName::Demeter => WrathKind::Collapse,
            GodName::Triton => WrathKind::PushAndFlood,
        }
    }
}

impl std::fmt::Display for GodName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GodName::Artemis => "Artemis",
            GodName::Demeter => "Demeter",
            GodName::Triton => "Triton",
        };
        f.write_str(name)
    }
}
