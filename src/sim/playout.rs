//! Drive a session to the end with a policy.

use tracing::debug;

use super::policy::ActionPolicy;
use crate::core::{GameRng, Session};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::rules::{GameResult, RulesEngine, Skyjo};

/// Outcome of a playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    /// Actions applied.
    pub actions: usize,
    /// `None` if the action budget ran out first.
    pub result: Option<GameResult>,
    /// Every event produced along the way.
    pub events: Vec<GameEvent>,
}

/// Play `session` forward with `policy` choosing every seat's actions.
///
/// Stops when the game is over, when the player to move has no action, or
/// after `max_actions` actions (0 means no limit). The session must already
/// be started; a lobby session returns immediately.
pub fn play_out<P: ActionPolicy<Skyjo>>(
    session: &mut Session,
    policy: &P,
    rng: &mut GameRng,
    max_actions: usize,
) -> Result<Playout, GameError> {
    let engine = Skyjo;
    let mut actions = 0;
    let mut events = Vec::new();

    while max_actions == 0 || actions < max_actions {
        let Some(player) = session.current_player() else {
            break;
        };
        let Some(action) = policy.choose_action(&engine, session, player, rng) else {
            break;
        };
        events.extend(engine.apply_action(session, player, &action)?);
        actions += 1;
    }

    let result = engine.is_terminal(session);
    debug!(actions, finished = result.is_some(), "playout complete");
    Ok(Playout {
        actions,
        result,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, SessionStatus};
    use crate::sim::{GreedyPolicy, RandomPolicy};

    fn started(seed: u64, players: usize) -> Session {
        let mut session = Session::new(GameConfig::default().with_seed(seed));
        for i in 0..players {
            session.add_player(&format!("Bot {i}")).unwrap();
        }
        session.start().unwrap();
        session
    }

    #[test]
    fn test_random_playout_finishes() {
        let mut session = started(1, 3);
        let mut rng = GameRng::new(1);

        let playout = play_out(&mut session, &RandomPolicy, &mut rng, 0).unwrap();

        assert_eq!(session.status(), SessionStatus::Finished);
        assert!(playout.result.is_some());
        assert_eq!(playout.actions as u64, session.version() - 4);
        assert_eq!(session.card_count(), 150);
        assert!(matches!(
            playout.events.last(),
            Some(GameEvent::GameFinished { .. })
        ));
    }

    #[test]
    fn test_greedy_playout_finishes() {
        let mut session = started(9, 4);
        let mut rng = GameRng::new(9);

        let playout = play_out(&mut session, &GreedyPolicy::default(), &mut rng, 0).unwrap();

        assert_eq!(session.status(), SessionStatus::Finished);
        let result = playout.result.unwrap();
        let best = session.players().iter().filter_map(|p| p.score).min().unwrap();
        for player in session.players() {
            assert_eq!(result.is_winner(player.id), player.score == Some(best));
        }
    }

    #[test]
    fn test_action_budget() {
        let mut session = started(5, 2);
        let mut rng = GameRng::new(5);

        let playout = play_out(&mut session, &RandomPolicy, &mut rng, 3).unwrap();

        assert_eq!(playout.actions, 3);
        assert_eq!(playout.result, None);
        assert!(session.status().is_running());
    }

    #[test]
    fn test_same_seeds_same_game() {
        let mut a = started(11, 2);
        let mut b = started(11, 2);
        play_out(&mut a, &RandomPolicy, &mut GameRng::new(2), 0).unwrap();
        play_out(&mut b, &RandomPolicy, &mut GameRng::new(2), 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_lobby_returns_immediately() {
        let mut session = Session::default();
        let playout = play_out(&mut session, &RandomPolicy, &mut GameRng::new(0), 0).unwrap();
        assert_eq!(playout.actions, 0);
        assert_eq!(playout.result, None);
    }
}
