//! Hand-built sessions for rules tests.

use crate::cards::{Card, Deck, DiscardPile};
use crate::core::{GameConfig, Player, PlayerId, Session, SessionStatus};
use crate::grid::{Grid, ROWS};

pub(crate) fn hidden(value: i8) -> Card {
    Card::new(value)
}

pub(crate) fn shown(value: i8) -> Card {
    Card::revealed(value)
}

/// A grid column listed top to bottom.
pub(crate) fn column(values: [i8; ROWS], face_up: bool) -> [Card; ROWS] {
    values.map(|v| if face_up { shown(v) } else { hidden(v) })
}

/// A running session at turn 1, seat 0 to play, with the given grids and
/// piles (last card of each pile on top).
pub(crate) fn rigged(grids: Vec<Vec<[Card; ROWS]>>, deck: Vec<Card>, discard: Vec<Card>) -> Session {
    let mut session = Session::new(GameConfig::default());
    session.players = grids
        .into_iter()
        .enumerate()
        .map(|(i, columns)| {
            let mut player = Player::new(PlayerId::new(i as u8), format!("P{i}"));
            player.grid = Grid::from_columns(columns);
            player
        })
        .collect();
    session.deck = Deck::from_cards(deck);
    session.discard = DiscardPile::from_cards(discard);
    session.status = SessionStatus::InProgress;
    session.current_player = 0;
    session.turn_number = 1;
    session
}
