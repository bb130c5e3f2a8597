//! Public view of a session.
//!
//! Everything a seated player or spectator is allowed to see: face-down
//! cells carry no value, the deck is only a count, and scores appear once
//! the game is finished.

use serde::{Deserialize, Serialize};

use super::action::DrawSource;
use super::player::PlayerId;
use super::state::{Session, SessionStatus, TurnPhase};
use crate::cards::Card;
use crate::rules::GameResult;

/// One grid cell as seen by everybody.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// `None` while the card is face-down.
    pub value: Option<i8>,
    pub face_up: bool,
}

impl From<Card> for CellView {
    fn from(card: Card) -> Self {
        Self {
            value: card.is_face_up().then_some(card.value()),
            face_up: card.is_face_up(),
        }
    }
}

/// A seated player as seen by everybody.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    /// Cells row by row.
    pub grid: Vec<Vec<CellView>>,
    /// Sum of face-up cards.
    pub visible_score: i32,
    /// Final score, once the game is finished.
    pub score: Option<i32>,
}

/// The card held mid-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCardView {
    pub value: i8,
    pub from_discard: bool,
}

/// Public state of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerView>,
    pub deck_size: usize,
    pub discard_size: usize,
    pub discard_top: Option<i8>,
    pub current_player_id: Option<PlayerId>,
    pub drawn_card: Option<DrawnCardView>,
    pub status: SessionStatus,
    pub phase: TurnPhase,
    pub first_finisher_id: Option<PlayerId>,
    /// Sole winner. `None` on a shared win.
    pub winner_id: Option<PlayerId>,
    /// Every player sharing the lowest score.
    pub winner_ids: Vec<PlayerId>,
    pub turn_number: u32,
    pub version: u64,
}

impl Snapshot {
    /// Capture the public view of `session`.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        let players = session
            .players()
            .iter()
            .map(|player| PlayerView {
                id: player.id,
                name: player.name.clone(),
                grid: player
                    .grid
                    .to_rows()
                    .into_iter()
                    .map(|row| row.into_iter().map(CellView::from).collect())
                    .collect(),
                visible_score: player.grid.visible_score(),
                score: player.score,
            })
            .collect();

        let drawn_card = session.drawn_card().map(|card| DrawnCardView {
            value: card.value(),
            from_discard: session.drawn_source() == DrawSource::Discard,
        });

        let (winner_id, winner_ids) = match session.result() {
            Some(GameResult::Winner(id)) => (Some(*id), vec![*id]),
            Some(GameResult::Winners(ids)) => (None, ids.clone()),
            None => (None, Vec::new()),
        };

        Self {
            players,
            deck_size: session.deck().len(),
            discard_size: session.discard().len(),
            discard_top: session.discard().top().map(Card::value),
            current_player_id: session.current_player(),
            drawn_card,
            status: session.status(),
            phase: session.phase(),
            first_finisher_id: session.first_finisher(),
            winner_id,
            winner_ids,
            turn_number: session.turn_number(),
            version: session.version(),
        }
    }
}

impl From<&Session> for Snapshot {
    fn from(session: &Session) -> Self {
        Self::of(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn started() -> Session {
        let mut session = Session::new(GameConfig::default());
        session.add_player("Ann").unwrap();
        session.add_player("Ben").unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn test_snapshot_hides_face_down_values() {
        let snapshot = Snapshot::of(&started());

        assert_eq!(snapshot.players.len(), 2);
        let grid = &snapshot.players[0].grid;
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == 4));
        assert!(grid.iter().flatten().all(|cell| cell.value.is_none() && !cell.face_up));
        assert_eq!(snapshot.players[0].visible_score, 0);
        assert_eq!(snapshot.players[0].score, None);
    }

    #[test]
    fn test_snapshot_table_fields() {
        let session = started();
        let snapshot = Snapshot::of(&session);

        assert_eq!(snapshot.deck_size, 150 - 24 - 1);
        assert_eq!(snapshot.discard_size, 1);
        assert_eq!(snapshot.discard_top, session.discard().top().map(Card::value));
        assert_eq!(snapshot.current_player_id, Some(PlayerId::new(0)));
        assert_eq!(snapshot.drawn_card, None);
        assert_eq!(snapshot.status, SessionStatus::InProgress);
        assert_eq!(snapshot.winner_id, None);
        assert!(snapshot.winner_ids.is_empty());
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = Snapshot::of(&started());
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_cell_view_from_card() {
        assert_eq!(
            CellView::from(Card::new(9)),
            CellView { value: None, face_up: false }
        );
        assert_eq!(
            CellView::from(Card::revealed(-2)),
            CellView { value: Some(-2), face_up: true }
        );
    }
}
