//! Turn advance and end-of-round detection.
//!
//! The first player to have every card face-up at the end of their turn
//! starts the last round. Play continues in seat order and the game ends
//! when the turn would come back to that player, so everyone else gets
//! exactly one more turn.

use tracing::{debug, info};

use crate::core::{PlayerId, Session, SessionStatus, TurnPhase};
use crate::events::GameEvent;

impl Session {
    /// Complete the current player's turn and hand over to the next seat.
    pub(crate) fn end_turn(&mut self, events: &mut Vec<GameEvent>) {
        let actor = PlayerId::new(self.current_player as u8);
        self.phase = TurnPhase::AwaitingDraw;

        let revealed = self
            .players
            .get(self.current_player)
            .is_some_and(|player| player.grid.all_revealed());
        if self.status == SessionStatus::InProgress && self.first_finisher.is_none() && revealed {
            self.first_finisher = Some(actor);
            self.status = SessionStatus::LastRound;
            info!(player = %actor, turn = self.turn_number, "last round started");
            events.push(GameEvent::LastRoundStarted { player: actor });
        }

        let next = (self.current_player + 1) % self.players.len().max(1);
        if self.first_finisher.is_some_and(|id| id.index() == next) {
            self.finish(events);
            return;
        }

        self.current_player = next;
        self.turn_number += 1;
        let next = PlayerId::new(next as u8);
        debug!(player = %next, turn = self.turn_number, status = ?self.status, "turn passed");
        events.push(GameEvent::TurnPassed { next });
    }
}
