//! Core engine types: players, actions, RNG, configuration, errors.
//!
//! These are the leaf types every other module builds on.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{Player, PlayerColor, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{GameConfig, PlayerSetup, DEFAULT_COLS, DEFAULT_ROWS, WORKERS_PER_PLAYER};
pub use action::{Action, ActionRecord};
pub use error::{ActionError, SetupError, WrathFailure};
