//! Rules engine trait and the Skyjo implementation.
//!
//! The engine defines:
//! - What actions are legal
//! - How actions modify a session
//! - When the game is over and who won

use serde::{Deserialize, Serialize};

use crate::core::{Action, DrawSource, PlayerId, Session, SessionStatus, TurnPhase};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::grid::Position;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single player with the strictly lowest score.
    Winner(PlayerId),
    /// Several players tied for the lowest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Every winning player.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Winners(ps) => ps,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must be deterministic given the session's RNG state,
///   and must leave the session untouched when it returns an error
/// - `is_terminal`: Return None while the game continues
pub trait RulesEngine {
    /// Every action `player` may submit right now.
    fn legal_actions(&self, session: &Session, player: PlayerId) -> Vec<Action>;

    /// Apply an action on behalf of `player`.
    ///
    /// Table actions (`AddPlayer`, `Start`) ignore `player`.
    fn apply_action(
        &self,
        session: &mut Session,
        player: PlayerId,
        action: &Action,
    ) -> Result<Vec<GameEvent>, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, session: &Session) -> Option<GameResult>;
}

/// The standard Skyjo rules, parameterized by the session's `GameConfig`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Skyjo;

impl RulesEngine for Skyjo {
    fn legal_actions(&self, session: &Session, player: PlayerId) -> Vec<Action> {
        if session.current_player() != Some(player) {
            return Vec::new();
        }
        let Some(seat) = session.player(player) else {
            return Vec::new();
        };
        let grid = &seat.grid;

        let mut actions = Vec::new();
        match session.phase() {
            TurnPhase::AwaitingDraw => {
                if !session.deck().is_empty() || session.discard().len() >= 2 {
                    actions.push(Action::Draw { from_discard: false });
                }
                if !session.discard().is_empty() {
                    actions.push(Action::Draw { from_discard: true });
                }
                actions.extend(grid.hidden_positions().map(Action::reveal));
            }
            TurnPhase::HoldingDrawnCard => {
                actions.extend(grid.positions().map(Action::play));
                let must_play = session.drawn_source() == DrawSource::Discard
                    && !session.config().allow_discarding_discard_draw
                    && !grid.is_empty();
                if !must_play {
                    actions.push(Action::DiscardDrawnCard);
                }
            }
            TurnPhase::MustReveal => {
                actions.extend(grid.hidden_positions().map(Action::reveal));
            }
        }
        actions
    }

    fn apply_action(
        &self,
        session: &mut Session,
        player: PlayerId,
        action: &Action,
    ) -> Result<Vec<GameEvent>, GameError> {
        match action {
            Action::AddPlayer { name } => session.add_player(name),
            Action::Start => session.start(),
            Action::Draw { from_discard } => session.draw(player, *from_discard),
            Action::Reveal { row, col } => session.reveal(player, Position::new(*row, *col)),
            Action::PlayDrawnCard { row, col } => {
                session.play_drawn_card(player, Position::new(*row, *col))
            }
            Action::DiscardDrawnCard => session.discard_drawn_card(player),
        }
    }

    fn is_terminal(&self, session: &Session) -> Option<GameResult> {
        match session.status() {
            SessionStatus::Finished => session.result().cloned(),
            _ => None,
        }
    }
}

impl Session {
    /// Apply an action with the standard rules.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>, GameError> {
        Skyjo.apply_action(self, player, action)
    }

    /// Apply an action only if the session is still at `expected_version`.
    ///
    /// Hosts that load, mutate and persist a session per request use this to
    /// detect a concurrent writer.
    pub fn apply_at(
        &mut self,
        expected_version: u64,
        player: PlayerId,
        action: &Action,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.expect_version(expected_version)?;
        self.apply(player, action)
    }

    /// Every action `player` may submit right now, under the standard rules.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        Skyjo.legal_actions(self, player)
    }
}
