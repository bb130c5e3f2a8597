//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;

use skyjo_engine::{GameConfig, GameEvent, PlayerId, Position, Session};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A started session with `players` seats named "P0", "P1", ...
pub fn started(config: GameConfig, players: usize) -> Session {
    init_logging();
    let mut session = Session::new(config);
    for i in 0..players {
        session.add_player(&format!("P{i}")).unwrap();
    }
    session.start().unwrap();
    session
}

/// The player to move reveals their first face-down card.
pub fn reveal_turn(session: &mut Session) -> (PlayerId, Vec<GameEvent>) {
    let player = session.current_player().expect("game is running");
    let pos: Position = session
        .player(player)
        .and_then(|p| p.grid.hidden_positions().next())
        .expect("a face-down card is left");
    let events = session.reveal(player, pos).unwrap();
    (player, events)
}
