//! Stateless hosting: load, mutate and persist the session around every
//! action, and expose only the public snapshot.

mod common;

use common::started;
use skyjo_engine::{
    Action, GameConfig, GameError, GameRng, PlayerId, RandomPolicy, RulesEngine, Session,
    SessionStatus, Skyjo, Snapshot,
};

/// What a request handler does: decode, apply, encode.
fn handle(stored: &[u8], version: u64, player: PlayerId, action: &Action) -> Result<Vec<u8>, GameError> {
    let mut session = Session::from_bytes(stored).expect("stored session decodes");
    session.apply_at(version, player, action)?;
    Ok(session.to_bytes().expect("session encodes"))
}

#[test]
fn test_stateless_host_matches_in_memory_game() {
    let mut live = started(GameConfig::default().with_seed(77), 3);
    let mut stored = live.to_bytes().unwrap();
    let mut rng = GameRng::new(77);

    while let Some(player) = live.current_player() {
        let legal = Skyjo.legal_actions(&live, player);
        let action = rng.choose(&legal).cloned().unwrap();

        stored = handle(&stored, live.version(), player, &action).unwrap();
        live.apply(player, &action).unwrap();

        assert_eq!(Session::from_bytes(&stored).unwrap(), live);
    }
    assert_eq!(live.status(), SessionStatus::Finished);
}

#[test]
fn test_reshuffle_survives_reload() {
    // Long games recycle the discard pile; the RNG position travels with
    // the session, so a reloaded copy reshuffles identically.
    let mut session = started(GameConfig::default().with_seed(5), 6);
    let mut rng = GameRng::new(5);
    skyjo_engine::play_out(&mut session, &RandomPolicy, &mut rng, 120).unwrap();

    let mut reloaded = Session::from_bytes(&session.to_bytes().unwrap()).unwrap();
    let mut a = GameRng::new(6);
    let mut b = GameRng::new(6);
    skyjo_engine::play_out(&mut session, &RandomPolicy, &mut a, 0).unwrap();
    skyjo_engine::play_out(&mut reloaded, &RandomPolicy, &mut b, 0).unwrap();

    assert_eq!(session, reloaded);
}

#[test]
fn test_concurrent_writer_is_detected() {
    let session = started(GameConfig::default(), 2);
    let stored = session.to_bytes().unwrap();
    let seen = session.version();
    let p0 = PlayerId::new(0);

    let first = handle(&stored, seen, p0, &Action::Draw { from_discard: true }).unwrap();
    let second = handle(&first, seen, p0, &Action::DiscardDrawnCard);

    assert_eq!(
        second,
        Err(GameError::StaleState {
            expected: seen,
            actual: seen + 1
        })
    );
}

#[test]
fn test_snapshot_json_hides_face_down_cards() {
    let mut session = started(GameConfig::default(), 2);
    let p0 = PlayerId::new(0);
    session.reveal(p0, skyjo_engine::Position::new(1, 2)).unwrap();

    let json = serde_json::to_value(Snapshot::of(&session)).unwrap();

    assert_eq!(json["deck_size"], 150 - 24 - 1);
    assert_eq!(json["discard_size"], 1);
    assert_eq!(json["current_player_id"], 1);
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["phase"], "AwaitingDraw");
    assert!(json["drawn_card"].is_null());

    let revealed = session.players()[0]
        .grid
        .get(skyjo_engine::Position::new(1, 2))
        .unwrap();
    let grid = &json["players"][0]["grid"];
    assert_eq!(grid[1][2]["value"], i64::from(revealed.value()));
    assert_eq!(grid[1][2]["face_up"], true);
    assert!(grid[0][0]["value"].is_null());
    assert!(json["players"][1]["grid"][2][3]["value"].is_null());
}

#[test]
fn test_snapshot_shows_drawn_card_source() {
    let mut session = started(GameConfig::default(), 2);
    session.draw(PlayerId::new(0), true).unwrap();

    let snapshot = Snapshot::of(&session);
    let drawn = snapshot.drawn_card.unwrap();
    assert!(drawn.from_discard);
    assert_eq!(snapshot.discard_size, 0);
    assert_eq!(snapshot.discard_top, None);
}

#[test]
fn test_corrupt_bytes_are_an_error() {
    assert!(Session::from_bytes(&[1, 2, 3]).is_err());
}
