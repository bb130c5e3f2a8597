//! Cards and the piles they live in.
//!
//! ## Key Types
//!
//! - `Card`: a value in `-2..=12` plus a face-up flag
//! - `Deck`: the face-down draw stack (top = end)
//! - `DiscardPile`: the face-up stack, top visible to everyone
//!
//! The deck factory functions (`build_deck`, `shuffle`,
//! `reshuffle_from_discard`) are the only places cards come into being or
//! get reordered.

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::{build_deck, reshuffle_from_discard, shuffle, Deck, DiscardPile, DECK_SIZE, DISTRIBUTION};
