//! Typed failures for rejected actions and session encoding.
//!
//! Every rejected action leaves the session untouched, so a `GameError`
//! is always scoped to the single action that produced it.

use thiserror::Error;

use crate::core::PlayerId;
use crate::grid::Position;

/// Reasons an action is rejected by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("at least {min} players are required to start")]
    NotEnoughPlayers { min: usize },

    #[error("the table is full ({max} players)")]
    TooManyPlayers { max: usize },

    #[error("the game has already started")]
    GameAlreadyStarted,

    #[error("player name must not be blank")]
    InvalidPlayerName,

    #[error("no turn is active")]
    TurnNotActive,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("the game is over")]
    GameOver,

    #[error("the drawn card must be played or discarded first")]
    MustResolveDrawnCardFirst,

    #[error("no card has been drawn this turn")]
    NoCardDrawn,

    #[error("a face-down card must be revealed to end the turn")]
    RevealRequired,

    #[error("a card taken from the discard pile must be played")]
    MustPlayDiscardDraw,

    #[error("card at {0} is already revealed")]
    AlreadyRevealed(Position),

    #[error("{0} is outside the grid")]
    InvalidPosition(Position),

    #[error("no cards left to draw or recycle")]
    EmptyCardPool,

    #[error("stale session: expected version {expected}, found {actual}")]
    StaleState { expected: u64, actual: u64 },
}

/// Failure to encode or decode a persisted session.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("session codec: {0}")]
    Bincode(#[from] bincode::Error),
}
