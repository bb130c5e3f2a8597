//! End-of-round detection and final scoring.

mod common;

use common::{reveal_turn, started};
use skyjo_engine::{
    GameConfig, GameEvent, GameResult, InitialReveal, PlayerId, RulesEngine, SessionStatus, Skyjo,
    Snapshot,
};

#[test]
fn test_three_player_round_ends_after_one_more_turn_each() {
    let mut session = started(GameConfig::default().with_seed(21), 3);
    let p0 = PlayerId::new(0);

    // P0 needs 12 reveals; everyone else is one behind when P0 finishes.
    for _ in 0..(3 * 11 + 1) {
        reveal_turn(&mut session);
    }
    assert_eq!(session.status(), SessionStatus::LastRound);
    assert_eq!(session.first_finisher(), Some(p0));
    assert!(session.players()[0].grid.all_revealed());
    let last_round_from = session.history().len();

    let (p1, _) = reveal_turn(&mut session);
    assert_eq!(p1, PlayerId::new(1));
    assert_eq!(session.status(), SessionStatus::LastRound);
    // P1 is now fully revealed too, but the first finisher stays P0.
    assert_eq!(session.first_finisher(), Some(p0));

    let (p2, events) = reveal_turn(&mut session);
    assert_eq!(p2, PlayerId::new(2));
    assert_eq!(session.status(), SessionStatus::Finished);
    assert!(matches!(events.last(), Some(GameEvent::GameFinished { .. })));

    let late_actors: Vec<_> = session
        .history()
        .iter()
        .skip(last_round_from)
        .filter_map(|record| record.player)
        .collect();
    assert_eq!(late_actors, vec![PlayerId::new(1), PlayerId::new(2)]);
}

#[test]
fn test_last_round_event_is_emitted_once() {
    let mut session = started(GameConfig::default().with_seed(4), 2);
    let mut last_round_events = 0;

    while session.status() != SessionStatus::Finished {
        let (_, events) = reveal_turn(&mut session);
        last_round_events += events
            .iter()
            .filter(|e| matches!(e, GameEvent::LastRoundStarted { .. }))
            .count();
    }
    assert_eq!(last_round_events, 1);
}

#[test]
fn test_fixed_pair_shortens_the_round() {
    let config = GameConfig::default()
        .with_seed(8)
        .with_initial_reveal(InitialReveal::FixedPair);
    let mut session = started(config, 2);

    // Ten reveals each, P0 finishing on turn 19.
    for _ in 0..(2 * 9 + 1) {
        reveal_turn(&mut session);
    }
    assert_eq!(session.status(), SessionStatus::LastRound);
    reveal_turn(&mut session);
    assert_eq!(session.status(), SessionStatus::Finished);
    assert_eq!(session.turn_number(), 20);
}

#[test]
fn test_scores_and_winner_agree() {
    for seed in 0..10 {
        let mut session = started(GameConfig::default().with_seed(seed), 3);
        while session.status() != SessionStatus::Finished {
            reveal_turn(&mut session);
        }

        let scores: Vec<i32> = session
            .players()
            .iter()
            .map(|p| p.score.expect("scored at the end"))
            .collect();
        for (player, score) in session.players().iter().zip(&scores) {
            assert_eq!(*score, player.grid.score());
        }

        let best = *scores.iter().min().unwrap();
        let result = Skyjo.is_terminal(&session).expect("game is over");
        let expected: Vec<PlayerId> = session
            .players()
            .iter()
            .filter(|p| p.score == Some(best))
            .map(|p| p.id)
            .collect();
        assert_eq!(result.winners(), expected.as_slice());

        let snapshot = Snapshot::of(&session);
        match result {
            GameResult::Winner(id) => assert_eq!(snapshot.winner_id, Some(id)),
            GameResult::Winners(_) => assert_eq!(snapshot.winner_id, None),
        }
        assert_eq!(snapshot.winner_ids, expected);
    }
}
