//! Final scoring.

use tracing::info;

use super::engine::GameResult;
use crate::core::{PlayerId, Session, SessionStatus, TurnPhase};
use crate::events::GameEvent;

/// Lowest score wins; a tie for lowest is a shared win.
#[must_use]
pub fn decide_result(scores: &[(PlayerId, i32)]) -> GameResult {
    let best = scores.iter().map(|&(_, score)| score).min().unwrap_or(0);
    let mut winners: Vec<PlayerId> = scores
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(id, _)| id)
        .collect();

    if winners.len() == 1 {
        GameResult::Winner(winners.remove(0))
    } else {
        GameResult::Winners(winners)
    }
}

impl Session {
    /// Close the game: score every grid and record the result.
    pub(crate) fn finish(&mut self, events: &mut Vec<GameEvent>) {
        self.status = SessionStatus::Finished;
        self.phase = TurnPhase::AwaitingDraw;

        let scores: Vec<(PlayerId, i32)> = self
            .players
            .iter_mut()
            .map(|player| {
                let score = player.grid.score();
                player.score = Some(score);
                (player.id, score)
            })
            .collect();
        let result = decide_result(&scores);

        info!(
            turn = self.turn_number,
            winners = ?result.winners(),
            "game finished"
        );
        self.result = Some(result.clone());
        events.push(GameEvent::GameFinished { scores, result });
    }
}
