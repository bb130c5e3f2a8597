//! # skyjo-engine
//!
//! A deterministic engine for the Skyjo card game.
//!
//! ## Design Principles
//!
//! 1. **Plain-Value Sessions**: A `Session` holds the whole game, including
//!    the RNG position. Hosts keep it in memory or load, mutate and persist
//!    it around every action.
//!
//! 2. **Atomic Actions**: Every action either succeeds completely or leaves
//!    the session unchanged and returns a typed `GameError`.
//!
//! 3. **N-Player**: Any table size the deck can deal to (2 to 12 seats).
//!
//! ## Architecture
//!
//! - **Events, not printing**: Accepted actions return `GameEvent`s. The
//!   engine logs through `tracing` and never writes to stdout.
//!
//! - **Persistent Data Structures**: The action history is an `im::Vector`,
//!   so sessions clone cheaply for atomic updates and speculative playouts.
//!
//! ## Modules
//!
//! - `core`: Players, session state, actions, RNG, configuration, snapshots
//! - `cards`: Cards, deck factory, discard pile
//! - `grid`: The 3×4 player grid
//! - `rules`: Turns, column elimination, end of round, scoring
//! - `events`: Events returned by accepted actions
//! - `sim`: Action policies and full-game playouts
//!
//! ## Example
//!
//! ```
//! use skyjo_engine::{GameConfig, Position, Session, SessionStatus};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(7));
//! session.add_player("Ann").unwrap();
//! session.add_player("Ben").unwrap();
//! session.start().unwrap();
//!
//! let ann = session.current_player().unwrap();
//! session.draw(ann, false).unwrap();
//! session.play_drawn_card(ann, Position::new(0, 0)).unwrap();
//!
//! assert_eq!(session.status(), SessionStatus::InProgress);
//! assert_eq!(session.card_count(), 150);
//! ```

pub mod error;
pub mod core;
pub mod cards;
pub mod grid;
pub mod rules;
pub mod events;
pub mod sim;

// Re-export commonly used types
pub use crate::error::{CodecError, GameError};

pub use crate::core::{
    PlayerId, Player,
    GameRng, GameRngState,
    GameConfig, InitialReveal, MIN_PLAYERS, MAX_SUPPORTED_PLAYERS,
    Action, ActionRecord, DrawSource,
    Session, SessionStatus, TurnPhase,
    Snapshot, PlayerView, CellView, DrawnCardView,
};

pub use crate::cards::{Card, Deck, DiscardPile, DECK_SIZE};

pub use crate::grid::{Grid, Position, COLUMNS, ROWS};

pub use crate::rules::{GameResult, RulesEngine, Skyjo};

pub use crate::events::GameEvent;

pub use crate::sim::{play_out, ActionPolicy, GreedyPolicy, Playout, RandomPolicy};
