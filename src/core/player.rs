//! Player identification and per-seat data.
//!
//! ## PlayerId
//!
//! A seat index at the table, 0-based in join order. Mapping a caller's
//! identity to a seat is up to the host.
//!
//! ## Player
//!
//! A seated player: display name, grid and final score.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Seat index of a player (0-based, join order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` players.
    ///
    /// ```
    /// use skyjo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat index.
    pub id: PlayerId,

    /// Display name (trimmed, never blank).
    pub name: String,

    /// Cards in front of the player. Empty until the game starts.
    pub grid: Grid,

    /// Final score, set once the game is finished.
    pub score: Option<i32>,
}

impl Player {
    /// Seat a player with an empty grid.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grid: Grid::default(),
            score: None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
