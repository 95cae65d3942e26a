//! Game configuration types.
//!
//! Front ends configure a game at startup by providing:
//! - `PlayerSetup`: name, god and colour for each seat
//! - `GameConfig`: board size, seed, wrath support and optional
//!   scenario pins (worker placements, starting player)
//!
//! `Game::new` validates the config and reports a `SetupError`.

use serde::{Deserialize, Serialize};

use super::player::{PlayerColor, PlayerId};
use crate::board::Coord;
use crate::gods::GodName;

/// Standard board height.
pub const DEFAULT_ROWS: i32 = 5;

/// Standard board width.
pub const DEFAULT_COLS: i32 = 5;

/// Workers each player controls.
pub const WORKERS_PER_PLAYER: usize = 2;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Display name.
    pub name: String,

    /// Assigned god. The two seats must hold different gods.
    pub god: GodName,

    /// Display colour.
    pub color: PlayerColor,
}

impl PlayerSetup {
    /// Create a seat with the given name and god.
    pub fn new(name: impl Into<String>, god: GodName, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            god,
            color,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows.
    pub rows: i32,

    /// Board columns.
    pub cols: i32,

    /// Seats in turn-order index (seat 0 is `PlayerId(0)`).
    pub players: Vec<PlayerSetup>,

    /// Seed for every random decision in the game.
    pub seed: u64,

    /// Whether the board supports wrath selection.
    pub wrath_enabled: bool,

    /// Pinned worker placements, in order: player 0 worker 0, player 0
    /// worker 1, player 1 worker 0, player 1 worker 1. `None` places
    /// workers at random.
    pub placements: Option<Vec<Coord>>,

    /// Pinned starting player. `None` picks at random.
    pub first_player: Option<PlayerId>,
}

impl GameConfig {
    /// Create an empty 5x5 configuration with wrath enabled.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            players: Vec::new(),
            seed,
            wrath_enabled: true,
            placements: None,
            first_player: None,
        }
    }

    /// Standard two-player setup with default colours.
    #[must_use]
    pub fn two_player(names: [&str; 2], gods: [GodName; 2], seed: u64) -> Self {
        Self::new(seed)
            .with_player(names[0], gods[0])
            .with_player(names[1], gods[1])
    }

    /// Add a seat with the default colour for its position.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, god: GodName) -> Self {
        let seat = PlayerId::new(self.players.len() as u8);
        self.players
            .push(PlayerSetup::new(name, god, PlayerColor::default_for(seat)));
        self
    }

    /// Override the board size.
    #[must_use]
    pub fn with_board_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Enable or disable wrath support.
    #[must_use]
    pub fn with_wrath(mut self, enabled: bool) -> Self {
        self.wrath_enabled = enabled;
        self
    }

    /// Pin the four worker placements.
    #[must_use]
    pub fn with_placements(mut self, placements: [Coord; 4]) -> Self {
        self.placements = Some(placements.to_vec());
        self
    }

    /// Pin the starting player.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(1);

        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 5);
        assert!(config.wrath_enabled);
        assert!(config.players.is_empty());
        assert!(config.placements.is_none());
        assert!(config.first_player.is_none());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::two_player(["Ada", "Bo"], [GodName::Artemis, GodName::Triton], 9)
            .with_wrath(false)
            .with_first_player(PlayerId::new(1))
            .with_placements([
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(4, 4),
                Coord::new(4, 3),
            ]);

        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[0].color, PlayerColor::Blue);
        assert_eq!(config.players[1].color, PlayerColor::Red);
        assert_eq!(config.players[1].god, GodName::Triton);
        assert!(!config.wrath_enabled);
        assert_eq!(config.first_player, Some(PlayerId::new(1)));
        assert_eq!(config.placements.as_ref().map(Vec::len), Some(4));
    }
}
