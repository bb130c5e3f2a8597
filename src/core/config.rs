//! Table rules chosen before the game starts.
//!
//! `GameConfig` is stored inside the session, so a session reloaded from
//! storage keeps playing by the rules it was created with.

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::grid::{Position, COLUMNS, ROWS};

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players the deck can deal to (12 cards each plus the opening discard).
pub const MAX_SUPPORTED_PLAYERS: usize = (DECK_SIZE - 1) / (ROWS * COLUMNS);

const FIXED_PAIR: [Position; 2] = [Position::new(0, 0), Position::new(0, 1)];

/// Which cards start face-up when grids are dealt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitialReveal {
    /// Every card starts face-down; players reveal all of them themselves.
    #[default]
    None,
    /// The first two cells of the top row start face-up.
    FixedPair,
}

impl InitialReveal {
    /// Cells turned face-up on deal.
    #[must_use]
    pub fn positions(self) -> &'static [Position] {
        match self {
            InitialReveal::None => &[],
            InitialReveal::FixedPair => &FIXED_PAIR,
        }
    }
}

/// Rules for one table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards face-up after the deal.
    pub initial_reveal: InitialReveal,

    /// Discarding a card drawn from the deck obliges the player to reveal
    /// one of their face-down cards before the turn ends.
    pub reveal_after_discard: bool,

    /// A card taken from the discard pile may be thrown back. When false it
    /// has to be played into the grid.
    pub allow_discarding_discard_draw: bool,

    /// Table capacity.
    pub max_players: usize,

    /// Seed for the session's shuffle stream.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_reveal: InitialReveal::None,
            reveal_after_discard: true,
            allow_discarding_discard_draw: true,
            max_players: 8,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the initial reveal policy.
    #[must_use]
    pub fn with_initial_reveal(mut self, initial_reveal: InitialReveal) -> Self {
        self.initial_reveal = initial_reveal;
        self
    }

    /// Require (or waive) the reveal after discarding a deck draw.
    #[must_use]
    pub fn with_reveal_after_discard(mut self, required: bool) -> Self {
        self.reveal_after_discard = required;
        self
    }

    /// Allow (or forbid) discarding a card taken from the discard pile.
    #[must_use]
    pub fn with_discarding_discard_draw(mut self, allowed: bool) -> Self {
        self.allow_discarding_discard_draw = allowed;
        self
    }

    /// Set table capacity, clamped to what the deck can deal.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max.clamp(MIN_PLAYERS, MAX_SUPPORTED_PLAYERS);
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
