//! Deck factory and the two shared piles.
//!
//! ## Distribution
//!
//! | value | count |
//! |-------|-------|
//! | -2    | 5     |
//! | -1    | 10    |
//! | 0     | 15    |
//! | 1..12 | 10    |
//!
//! 150 cards in total. Once a session starts, cards only move between the
//! deck, the discard pile, the player grids and the drawn-card slot.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::card::Card;
use crate::core::GameRng;
use crate::error::GameError;

/// `(value, copies)` for every card value in the game.
pub const DISTRIBUTION: [(i8, usize); 15] = [
    (-2, 5),
    (-1, 10),
    (0, 15),
    (1, 10),
    (2, 10),
    (3, 10),
    (4, 10),
    (5, 10),
    (6, 10),
    (7, 10),
    (8, 10),
    (9, 10),
    (10, 10),
    (11, 10),
    (12, 10),
];

/// Total number of cards in a full deck.
pub const DECK_SIZE: usize = 150;

/// Face-down draw stack. The top card is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from explicit cards (last card is drawn first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Face-up discard stack. The top card is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Build a pile from explicit cards (last card is the top).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The visible top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Put a card on top, face-up.
    pub fn push(&mut self, mut card: Card) {
        card.flip();
        self.cards.push(card);
    }

    /// Take the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Build the full 150-card deck in distribution order.
#[must_use]
pub fn build_deck() -> Deck {
    let cards = DISTRIBUTION
        .iter()
        .flat_map(|&(value, copies)| std::iter::repeat(Card::new(value)).take(copies))
        .collect();
    Deck { cards }
}

/// Return the deck in a uniformly random order.
#[must_use]
pub fn shuffle(mut deck: Deck, rng: &mut GameRng) -> Deck {
    rng.shuffle(&mut deck.cards);
    deck
}

/// Recycle every discard but the top card into a fresh shuffled deck.
///
/// The pile is left holding only its former top card. Fails with
/// `EmptyCardPool`, leaving the pile untouched, when fewer than two cards
/// are available.
pub fn reshuffle_from_discard(
    discard: &mut DiscardPile,
    rng: &mut GameRng,
) -> Result<Deck, GameError> {
    if discard.len() < 2 {
        return Err(GameError::EmptyCardPool);
    }

    let top = discard.cards.split_off(discard.cards.len() - 1);
    let recycled = std::mem::replace(&mut discard.cards, top);

    trace!(recycled = recycled.len(), "reshuffling discard pile into deck");
    Ok(shuffle(Deck { cards: recycled }, rng))
}
