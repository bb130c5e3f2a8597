//! Events emitted by accepted actions.
//!
//! Every successful action returns the events it produced, in order. Hosts
//! forward them to clients or render them as a game log; the engine itself
//! never reads them back.
//!
//! ## Example
//!
//! ```
//! use skyjo_engine::core::Session;
//! use skyjo_engine::events::GameEvent;
//!
//! let mut session = Session::default();
//! let events = session.add_player("Ann").unwrap();
//! assert!(matches!(events[0], GameEvent::PlayerJoined { .. }));
//! assert_eq!(events[0].to_string(), "Ann joined as Player 0");
//! ```

mod event;

pub use event::GameEvent;
