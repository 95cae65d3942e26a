//! # santorini-wrath
//!
//! Rules engine for a two-player Santorini-style building game with god
//! powers and a once-per-game god wrath.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: no rendering, input plumbing or real-time sources.
//!    Front ends send [`Action`]s and redraw from queries and events.
//!
//! 2. **Illegal is not exceptional**: a rejected action returns an
//!    [`ActionError`] and leaves the game untouched.
//!
//! 3. **Deterministic**: every random decision draws from one seeded
//!    [`GameRng`], so a config plus an action history replays exactly.
//!
//! ## Modules
//!
//! - `core`: players, actions, configuration, errors, RNG
//! - `board`: coordinates, blocks, cells, workers and the wrath selection
//! - `rules`: movement/build legality and the `RulesEngine` seam
//! - `gods`: god cards and their per-turn powers
//! - `wrath`: seal, collapse and push-and-flood effects
//! - `game`: the `Game` aggregate, turn controller and turn clock
//!
//! ## Example
//!
//! ```
//! use santorini_wrath::{Coord, Game, GameConfig, GodName, Phase, PlayerId};
//!
//! let config = GameConfig::two_player(["Ada", "Bo"], [GodName::Artemis, GodName::Demeter], 7)
//!     .with_placements([
//!         Coord::new(0, 0),
//!         Coord::new(0, 1),
//!         Coord::new(4, 4),
//!         Coord::new(4, 3),
//!     ])
//!     .with_first_player(PlayerId::new(0));
//! let mut game = Game::new(config).unwrap();
//!
//! game.select_cell(0, 0).unwrap();
//! game.select_cell(1, 0).unwrap();
//! assert_eq!(game.phase(), Phase::Build);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod gods;
pub mod rules;
pub mod wrath;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, GameConfig, GameRng, Player, PlayerColor, PlayerId,
    PlayerMap, PlayerSetup, SetupError, WrathFailure,
};

pub use crate::board::{Block, Board, Cell, Coord, HighlightKind, Selection, Worker, WorkerId};

pub use crate::rules::{GameResult, RulesEngine, WinReason};

pub use crate::gods::{ExtraAction, GodCard, GodName, PowerPhase};

pub use crate::wrath::{WrathKind, WrathReport};

pub use crate::game::{
    ActionResult, Events, Game, GameEvent, Phase, TurnClock, TurnState, DEFAULT_TURN_BUDGET,
};
