//! The closed set of actions a host can submit, and the history record.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::grid::Position;

/// Every mutating entry point of the engine.
///
/// `AddPlayer` and `Start` are table actions and are not bound to a seat;
/// the rest are turn actions issued by the player whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddPlayer { name: String },
    Start,
    Draw { from_discard: bool },
    Reveal { row: usize, col: usize },
    PlayDrawnCard { row: usize, col: usize },
    DiscardDrawnCard,
}

impl Action {
    /// Reveal the card at `pos`.
    #[must_use]
    pub fn reveal(pos: Position) -> Self {
        Action::Reveal { row: pos.row, col: pos.col }
    }

    /// Play the drawn card onto `pos`.
    #[must_use]
    pub fn play(pos: Position) -> Self {
        Action::PlayDrawnCard { row: pos.row, col: pos.col }
    }

    /// Is this a turn action (as opposed to table setup)?
    #[must_use]
    pub fn is_turn_action(&self) -> bool {
        !matches!(self, Action::AddPlayer { .. } | Action::Start)
    }

    /// Grid position targeted by the action, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match *self {
            Action::Reveal { row, col } | Action::PlayDrawnCard { row, col } => {
                Some(Position::new(row, col))
            }
            _ => None,
        }
    }
}

/// Where the drawn card came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    #[default]
    None,
    Deck,
    Discard,
}

/// An accepted action with its ordering metadata.
///
/// Used for replay and for checking who acted when.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted, `None` for table actions.
    pub player: Option<PlayerId>,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (0 before the game starts).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Option<PlayerId>, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_actions() {
        assert!(!Action::Start.is_turn_action());
        assert!(!Action::AddPlayer { name: "Ann".into() }.is_turn_action());
        assert!(Action::Draw { from_discard: true }.is_turn_action());
        assert!(Action::DiscardDrawnCard.is_turn_action());
    }

    #[test]
    fn test_position() {
        let pos = Position::new(2, 1);
        assert_eq!(Action::reveal(pos).position(), Some(pos));
        assert_eq!(Action::play(pos).position(), Some(pos));
        assert_eq!(Action::Start.position(), None);
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_string(&Action::Draw { from_discard: true }).unwrap();
        assert_eq!(json, r#"{"draw":{"from_discard":true}}"#);

        let parsed: Action = serde_json::from_str(r#"{"reveal":{"row":1,"col":3}}"#).unwrap();
        assert_eq!(parsed, Action::Reveal { row: 1, col: 3 });

        let start: Action = serde_json::from_str(r#""start""#).unwrap();
        assert_eq!(start, Action::Start);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Some(PlayerId::new(1)), Action::DiscardDrawnCard, 2, 1);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
