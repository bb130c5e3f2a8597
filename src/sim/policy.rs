//! Policies for choosing a player's next action.
//!
//! - `RandomPolicy`: uniform over the legal actions
//! - `GreedyPolicy`: keeps low cards, dumps high ones

use crate::cards::Card;
use crate::core::{Action, DrawSource, GameRng, PlayerId, Session, TurnPhase};
use crate::grid::{Grid, Position};
use crate::rules::RulesEngine;

/// Policy for picking one action for the player to move.
pub trait ActionPolicy<E: RulesEngine>: Send + Sync {
    /// Choose an action for `player`.
    ///
    /// Returns `None` if no legal actions exist.
    fn choose_action(
        &self,
        engine: &E,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Action>;
}

// =============================================================================
// Random
// =============================================================================

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl<E: RulesEngine> ActionPolicy<E> for RandomPolicy {
    fn choose_action(
        &self,
        engine: &E,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = engine.legal_actions(session, player);
        rng.choose(&actions).cloned()
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Simple heuristic player.
///
/// Takes the discard when it beats a visible card by more than `margin`,
/// swaps drawn cards over the highest visible card it beats, and otherwise
/// keeps cards of at most `keep_threshold` by playing them over a hidden one.
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    pub keep_threshold: i8,
    pub margin: i8,
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self {
            keep_threshold: 4,
            margin: 2,
        }
    }
}

impl GreedyPolicy {
    /// Face-up cell with the highest value.
    fn worst_visible(grid: &Grid) -> Option<(Position, Card)> {
        grid.positions()
            .filter_map(|pos| grid.get(pos).map(|card| (pos, card)))
            .filter(|(_, card)| card.is_face_up())
            .max_by_key(|(_, card)| card.value())
    }

    fn preferred(&self, session: &Session, grid: &Grid) -> Option<Action> {
        let first_hidden = grid.hidden_positions().next();
        let worst = Self::worst_visible(grid);

        match session.phase() {
            TurnPhase::AwaitingDraw => {
                let top = session.discard().top()?.value();
                let bar = top.saturating_add(self.margin);
                let take = worst.is_some_and(|(_, card)| card.value() > bar);
                Some(Action::Draw { from_discard: take })
            }
            TurnPhase::HoldingDrawnCard => {
                let drawn = session.drawn_card()?.value();
                match (worst, first_hidden) {
                    (Some((pos, card)), _) if card.value() > drawn => Some(Action::play(pos)),
                    (_, Some(pos)) if drawn <= self.keep_threshold => Some(Action::play(pos)),
                    _ if session.drawn_source() == DrawSource::Deck => Some(Action::DiscardDrawnCard),
                    (Some((pos, _)), _) => Some(Action::play(pos)),
                    _ => first_hidden.map(Action::play),
                }
            }
            TurnPhase::MustReveal => first_hidden.map(Action::reveal),
        }
    }
}

impl<E: RulesEngine> ActionPolicy<E> for GreedyPolicy {
    fn choose_action(
        &self,
        engine: &E,
        session: &Session,
        player: PlayerId,
        _rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = engine.legal_actions(session, player);
        let grid = &session.player(player)?.grid;

        match self.preferred(session, grid) {
            Some(action) if actions.contains(&action) => Some(action),
            _ => actions.into_iter().next(),
        }
    }
}
