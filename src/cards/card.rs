//! A single playing card.

use serde::{Deserialize, Serialize};

/// A card with an immutable value and a face-up flag.
///
/// The flag only ever flips from face-down to face-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: i8,
    face_up: bool,
}

impl Card {
    /// Lowest card value in the game.
    pub const MIN_VALUE: i8 = -2;

    /// Highest card value in the game.
    pub const MAX_VALUE: i8 = 12;

    /// Create a face-down card.
    #[must_use]
    pub const fn new(value: i8) -> Self {
        debug_assert!(value >= Self::MIN_VALUE && value <= Self::MAX_VALUE);
        Self {
            value,
            face_up: false,
        }
    }

    /// Create a card that is already face-up.
    #[must_use]
    pub const fn revealed(value: i8) -> Self {
        let mut card = Self::new(value);
        card.face_up = true;
        card
    }

    /// The card's point value.
    #[must_use]
    pub const fn value(self) -> i8 {
        self.value
    }

    /// Is the card face-up?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up.
    pub fn flip(&mut self) {
        self.face_up = true;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "[{}]", self.value)
        } else {
            write!(f, "[??]")
        }
    }
}
