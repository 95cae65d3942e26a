//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The engine is two-player, but ids stay
//! index-based so `PlayerMap` lookups are O(1).
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec`, indexed by `PlayerId`.
//!
//! ## Player
//!
//! Name, god card, colour and the monotonic winner flag.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::gods::GodCard;

/// Number of players in every game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player in a two-player game.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per player from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Build from exactly one value per player, in player order.
    ///
    /// Returns `None` when the count does not match.
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        (data.len() == PLAYER_COUNT).then_some(Self { data })
    }

    /// Get a reference to a player's data.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the two seats; see
    /// [`try_get`](Self::try_get).
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the two seats; see
    /// [`try_get_mut`](Self::try_get_mut).
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// A player's data, or `None` for an id outside the two seats.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn try_get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Values as a slice, in player order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Display colour handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Blue,
    Red,
    Green,
    Yellow,
}

impl PlayerColor {
    /// Default colour for a seat: blue for the first player, red for the second.
    #[must_use]
    pub const fn default_for(player: PlayerId) -> Self {
        match player.0 {
            0 => PlayerColor::Blue,
            _ => PlayerColor::Red,
        }
    }
}

/// A seated player.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: PlayerColor,
    /// The player's god. Mutable because it carries per-turn power state
    /// and the once-per-game wrath flag.
    pub god: GodCard,
    winner: bool,
}

impl Player {
    /// Create a player who has not won.
    pub fn new(id: PlayerId, name: impl Into<String>, god: GodCard, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            god,
            winner: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// Flag this player as the winner. Once set it is never cleared.
    pub(crate) fn set_winner(&mut self) {
        self.winner = true;
    }
}
