//! Game event types.

use serde::{Deserialize, Serialize};

use crate::core::{DrawSource, PlayerId};
use crate::grid::Position;
use crate::rules::GameResult;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerJoined {
        player: PlayerId,
        name: String,
    },
    GameStarted {
        players: usize,
        first_player: PlayerId,
        discard_top: i8,
    },
    CardDrawn {
        player: PlayerId,
        value: i8,
        source: DrawSource,
    },
    /// The discard pile (minus its top card) became the new deck.
    DeckReshuffled {
        cards: usize,
    },
    CardRevealed {
        player: PlayerId,
        pos: Position,
        value: i8,
    },
    CardReplaced {
        player: PlayerId,
        pos: Position,
        placed: i8,
        removed: i8,
    },
    CardDiscarded {
        player: PlayerId,
        value: i8,
    },
    /// The player owes a reveal before the turn can end.
    RevealRequired {
        player: PlayerId,
    },
    ColumnEliminated {
        player: PlayerId,
        column: usize,
        value: i8,
    },
    /// `player` revealed their whole grid; everyone else gets one more turn.
    LastRoundStarted {
        player: PlayerId,
    },
    TurnPassed {
        next: PlayerId,
    },
    GameFinished {
        scores: Vec<(PlayerId, i32)>,
        result: GameResult,
    },
}

impl GameEvent {
    /// The player the event is about, if it concerns a single seat.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerJoined { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::CardRevealed { player, .. }
            | GameEvent::CardReplaced { player, .. }
            | GameEvent::CardDiscarded { player, .. }
            | GameEvent::RevealRequired { player }
            | GameEvent::ColumnEliminated { player, .. }
            | GameEvent::LastRoundStarted { player } => Some(*player),
            GameEvent::TurnPassed { next } => Some(*next),
            GameEvent::GameStarted { .. }
            | GameEvent::DeckReshuffled { .. }
            | GameEvent::GameFinished { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerJoined { player, name } => write!(f, "{name} joined as {player}"),
            GameEvent::GameStarted {
                players,
                first_player,
                discard_top,
            } => write!(
                f,
                "game started with {players} players, {first_player} opens on a {discard_top}"
            ),
            GameEvent::CardDrawn {
                player,
                value,
                source,
            } => match source {
                DrawSource::Discard => write!(f, "{player} took a {value} from the discard pile"),
                _ => write!(f, "{player} drew a {value}"),
            },
            GameEvent::DeckReshuffled { cards } => {
                write!(f, "{cards} discards were shuffled into a new deck")
            }
            GameEvent::CardRevealed { player, pos, value } => {
                write!(f, "{player} revealed a {value} at {pos}")
            }
            GameEvent::CardReplaced {
                player,
                pos,
                placed,
                removed,
            } => write!(f, "{player} placed a {placed} at {pos}, discarding a {removed}"),
            GameEvent::CardDiscarded { player, value } => write!(f, "{player} discarded a {value}"),
            GameEvent::RevealRequired { player } => {
                write!(f, "{player} must reveal a card")
            }
            GameEvent::ColumnEliminated {
                player,
                column,
                value,
            } => write!(f, "{player} cleared column {column} of {value}s"),
            GameEvent::LastRoundStarted { player } => {
                write!(f, "{player} revealed every card, last round")
            }
            GameEvent::TurnPassed { next } => write!(f, "{next} to play"),
            GameEvent::GameFinished { scores, result } => {
                write!(f, "game over:")?;
                for (player, score) in scores {
                    write!(f, " {player}={score}")?;
                }
                match result {
                    GameResult::Winner(winner) => write!(f, ", {winner} wins"),
                    GameResult::Winners(winners) => {
                        let names: Vec<String> = winners.iter().map(ToString::to_string).collect();
                        write!(f, ", shared win for {}", names.join(" and "))
                    }
                }
            }
        }
    }
}
