//! The turn state machine.
//!
//! ```text
//! AwaitingDraw --draw--> HoldingDrawnCard --play--------------------> next turn
//!      |                        |
//!      |                        +--discard (deck draw)--> MustReveal --reveal--> next turn
//!      |                        +--discard (otherwise)--------------------------> next turn
//!      +--reveal------------------------------------------------------------> next turn
//! ```
//!
//! Every entry point runs inside `Session::transact`, so a rejected action
//! leaves the session exactly as it was.

use tracing::trace;

use super::elimination::eliminate_columns;
use crate::cards::reshuffle_from_discard;
use crate::core::{Action, DrawSource, GameRng, Player, PlayerId, Session, SessionStatus, TurnPhase};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::grid::Position;

impl Session {
    /// Draw the top card of the deck or the discard pile.
    ///
    /// An empty deck is rebuilt from the discard pile first.
    pub fn draw(&mut self, player: PlayerId, from_discard: bool) -> Result<Vec<GameEvent>, GameError> {
        self.transact(Some(player), Action::Draw { from_discard }, |session, events| {
            session.check_turn(player)?;
            match session.phase {
                TurnPhase::AwaitingDraw => {}
                TurnPhase::HoldingDrawnCard => return Err(GameError::MustResolveDrawnCardFirst),
                TurnPhase::MustReveal => return Err(GameError::RevealRequired),
            }

            let (mut card, source) = if from_discard {
                let card = session.discard.pop().ok_or(GameError::EmptyCardPool)?;
                (card, DrawSource::Discard)
            } else {
                if session.deck.is_empty() {
                    let mut rng = GameRng::from_state(&session.rng);
                    session.deck = reshuffle_from_discard(&mut session.discard, &mut rng)?;
                    session.rng = rng.state();
                    events.push(GameEvent::DeckReshuffled {
                        cards: session.deck.len(),
                    });
                }
                let card = session.deck.draw().ok_or(GameError::EmptyCardPool)?;
                (card, DrawSource::Deck)
            };
            card.flip();

            session.drawn_card = Some(card);
            session.drawn_source = source;
            session.phase = TurnPhase::HoldingDrawnCard;
            events.push(GameEvent::CardDrawn {
                player,
                value: card.value(),
                source,
            });
            Ok(())
        })
    }

    /// Turn one of the player's face-down cards face-up.
    ///
    /// Opens and ends a turn on its own, or settles a pending `MustReveal`.
    pub fn reveal(&mut self, player: PlayerId, pos: Position) -> Result<Vec<GameEvent>, GameError> {
        self.transact(Some(player), Action::reveal(pos), |session, events| {
            session.check_turn(player)?;
            if session.phase == TurnPhase::HoldingDrawnCard {
                return Err(GameError::MustResolveDrawnCardFirst);
            }

            let card = session.seat_mut(player)?.grid.reveal(pos)?;
            events.push(GameEvent::CardRevealed {
                player,
                pos,
                value: card.value(),
            });

            session.settle_grid(player, events)?;
            session.end_turn(events);
            Ok(())
        })
    }

    /// Swap the drawn card into the grid; the replaced card is discarded.
    pub fn play_drawn_card(
        &mut self,
        player: PlayerId,
        pos: Position,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.transact(Some(player), Action::play(pos), |session, events| {
            session.check_turn(player)?;
            if session.phase == TurnPhase::MustReveal {
                return Err(GameError::RevealRequired);
            }
            let card = session.drawn_card.ok_or(GameError::NoCardDrawn)?;

            let removed = session.seat_mut(player)?.grid.replace(pos, card)?;
            session.discard.push(removed);
            session.drawn_card = None;
            session.drawn_source = DrawSource::None;
            events.push(GameEvent::CardReplaced {
                player,
                pos,
                placed: card.value(),
                removed: removed.value(),
            });

            session.settle_grid(player, events)?;
            session.end_turn(events);
            Ok(())
        })
    }

    /// Throw the drawn card onto the discard pile.
    ///
    /// Discarding a deck draw obliges a reveal before the turn ends, unless
    /// the table waives it or nothing is left face-down.
    pub fn discard_drawn_card(&mut self, player: PlayerId) -> Result<Vec<GameEvent>, GameError> {
        self.transact(Some(player), Action::DiscardDrawnCard, |session, events| {
            session.check_turn(player)?;
            if session.phase == TurnPhase::MustReveal {
                return Err(GameError::RevealRequired);
            }
            let card = session.drawn_card.ok_or(GameError::NoCardDrawn)?;
            let source = session.drawn_source;

            let grid = &session.player(player).ok_or(GameError::UnknownPlayer(player))?.grid;
            let has_hidden = grid.hidden_positions().next().is_some();
            if source == DrawSource::Discard
                && !session.config.allow_discarding_discard_draw
                && !grid.is_empty()
            {
                return Err(GameError::MustPlayDiscardDraw);
            }

            session.discard.push(card);
            session.drawn_card = None;
            session.drawn_source = DrawSource::None;
            events.push(GameEvent::CardDiscarded {
                player,
                value: card.value(),
            });

            if source == DrawSource::Deck && session.config.reveal_after_discard && has_hidden {
                session.phase = TurnPhase::MustReveal;
                events.push(GameEvent::RevealRequired { player });
            } else {
                session.end_turn(events);
            }
            Ok(())
        })
    }

    /// Fail unless `player` may take a turn action right now.
    fn check_turn(&self, player: PlayerId) -> Result<(), GameError> {
        match self.status {
            SessionStatus::Finished => return Err(GameError::GameOver),
            SessionStatus::NotStarted => return Err(GameError::TurnNotActive),
            SessionStatus::InProgress | SessionStatus::LastRound => {}
        }
        if player.index() >= self.players.len() {
            return Err(GameError::UnknownPlayer(player));
        }
        if player.index() != self.current_player {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    fn seat_mut(&mut self, player: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Eliminate any uniform columns left by the last grid change.
    fn settle_grid(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let seat = self
            .players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer(player))?;
        for (column, value) in eliminate_columns(&mut seat.grid, &mut self.discard) {
            trace!(player = %player, column, value, "column cleared");
            events.push(GameEvent::ColumnEliminated {
                player,
                column,
                value,
            });
        }
        Ok(())
    }
}
