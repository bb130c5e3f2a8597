//! Core engine types: players, session state, actions, RNG, configuration.
//!
//! The session is a plain value. The rules in `crate::rules` mutate it one
//! action at a time; hosts store it however they like.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod snapshot;

pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, InitialReveal, MAX_SUPPORTED_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord, DrawSource};
pub use state::{Session, SessionStatus, TurnPhase};
pub use snapshot::{CellView, DrawnCardView, PlayerView, Snapshot};
