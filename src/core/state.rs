//! The session: one game's complete state as a plain value.
//!
//! ## Session
//!
//! Holds the deck, the discard pile, the seated players, the turn pointer
//! and the engine's phase. Hosts may keep a session in memory for the whole
//! game or load, mutate and persist it around every action; the engine keeps
//! nothing outside this value.
//!
//! ## Atomicity
//!
//! Every action runs against a working copy that replaces the session only
//! when the action succeeds, so a rejected action leaves the session
//! identical to what it was. The history is an `im::Vector`, which keeps
//! that copy cheap.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::action::{Action, ActionRecord, DrawSource};
use super::config::{GameConfig, MAX_SUPPORTED_PLAYERS, MIN_PLAYERS};
use super::player::{Player, PlayerId};
use super::rng::{GameRng, GameRngState};
use crate::cards::{build_deck, shuffle, Card, Deck, DiscardPile};
use crate::error::{CodecError, GameError};
use crate::events::GameEvent;
use crate::grid::{Grid, COLUMNS, ROWS};
use crate::rules::GameResult;

/// Lifecycle of a session. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    NotStarted,
    InProgress,
    LastRound,
    Finished,
}

impl SessionStatus {
    /// Are turns being played?
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, SessionStatus::InProgress | SessionStatus::LastRound)
    }
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card in hand: draw or reveal.
    #[default]
    AwaitingDraw,
    /// A drawn card must be played or discarded.
    HoldingDrawnCard,
    /// A deck draw was discarded; a face-down card must be revealed.
    MustReveal,
}

/// One game's complete state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) discard: DiscardPile,
    pub(crate) current_player: usize,
    pub(crate) drawn_card: Option<Card>,
    pub(crate) drawn_source: DrawSource,
    pub(crate) phase: TurnPhase,
    pub(crate) first_finisher: Option<PlayerId>,
    pub(crate) status: SessionStatus,
    pub(crate) result: Option<GameResult>,
    pub(crate) rng: GameRngState,
    pub(crate) turn_number: u32,
    pub(crate) sequence: u32,
    pub(crate) version: u64,
    pub(crate) history: Vector<ActionRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Session {
    /// Create an empty table with a full, unshuffled deck.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRngState::seeded(config.seed);
        Self {
            config,
            players: Vec::new(),
            deck: build_deck(),
            discard: DiscardPile::default(),
            current_player: 0,
            drawn_card: None,
            drawn_source: DrawSource::None,
            phase: TurnPhase::AwaitingDraw,
            first_finisher: None,
            status: SessionStatus::NotStarted,
            result: None,
            rng,
            turn_number: 0,
            sequence: 0,
            version: 0,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    /// Table rules.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The draw stack.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The discard pile.
    #[must_use]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    /// Whose turn it is, while turns are being played.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.status
            .is_running()
            .then_some(PlayerId::new(self.current_player as u8))
    }

    /// The card held mid-turn.
    #[must_use]
    pub fn drawn_card(&self) -> Option<Card> {
        self.drawn_card
    }

    /// Where the held card came from.
    #[must_use]
    pub fn drawn_source(&self) -> DrawSource {
        self.drawn_source
    }

    /// Turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The first player to reveal their whole grid.
    #[must_use]
    pub fn first_finisher(&self) -> Option<PlayerId> {
        self.first_finisher
    }

    /// Outcome, once the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Turn counter (1 for the opening turn, 0 before the start).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Count of accepted actions. Hosts use it as an optimistic lock.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Every accepted action in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Card accounting ===

    /// Cards across deck, discard, grids and the drawn-card slot.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.players.iter().map(|p| p.grid.len()).sum::<usize>()
            + usize::from(self.drawn_card.is_some())
    }

    /// Copies of each card value across every container.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<i8, usize> {
        let mut census = FxHashMap::default();
        let all = self
            .deck
            .cards()
            .iter()
            .chain(self.discard.cards())
            .chain(self.players.iter().flat_map(|p| p.grid.cards()))
            .chain(self.drawn_card.iter());
        for card in all {
            *census.entry(card.value()).or_insert(0) += 1;
        }
        census
    }

    // === Table setup ===

    /// Seat a new player at the end of the turn order.
    pub fn add_player(&mut self, name: &str) -> Result<Vec<GameEvent>, GameError> {
        let name = name.trim();
        let action = Action::AddPlayer { name: name.to_string() };
        self.transact(None, action, |session, events| {
            if session.status != SessionStatus::NotStarted {
                return Err(GameError::GameAlreadyStarted);
            }
            if name.is_empty() {
                return Err(GameError::InvalidPlayerName);
            }
            // Field assignment can skip the builder's clamp.
            let max = session.config.max_players.min(MAX_SUPPORTED_PLAYERS);
            if session.players.len() >= max {
                return Err(GameError::TooManyPlayers { max });
            }

            let id = PlayerId::new(session.players.len() as u8);
            session.players.push(Player::new(id, name));
            info!(player = %id, player_name = name, "player joined");
            events.push(GameEvent::PlayerJoined {
                player: id,
                name: name.to_string(),
            });
            Ok(())
        })
    }

    /// Shuffle, deal every grid and turn the opening discard.
    pub fn start(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.transact(None, Action::Start, |session, events| {
            if session.status != SessionStatus::NotStarted {
                return Err(GameError::GameAlreadyStarted);
            }
            if session.players.len() < MIN_PLAYERS {
                return Err(GameError::NotEnoughPlayers { min: MIN_PLAYERS });
            }
            if session.players.len() * ROWS * COLUMNS >= session.deck.len() {
                return Err(GameError::EmptyCardPool);
            }

            let mut rng = GameRng::from_state(&session.rng);
            session.deck = shuffle(std::mem::take(&mut session.deck), &mut rng);
            session.rng = rng.state();

            let initial_reveal = session.config.initial_reveal;
            for player in &mut session.players {
                player.grid = Grid::deal(&mut session.deck, initial_reveal)?;
            }
            let opening = session.deck.draw().ok_or(GameError::EmptyCardPool)?;
            session.discard.push(opening);

            session.status = SessionStatus::InProgress;
            session.current_player = 0;
            session.turn_number = 1;

            let first = PlayerId::new(0);
            info!(players = session.players.len(), first_player = %first, "game started");
            events.push(GameEvent::GameStarted {
                players: session.players.len(),
                first_player: first,
                discard_top: opening.value(),
            });
            Ok(())
        })
    }

    // === Transactions ===

    /// Run `f` against a working copy and keep the result only on success.
    ///
    /// Accepted actions are appended to the history and bump the version.
    pub(crate) fn transact(
        &mut self,
        actor: Option<PlayerId>,
        action: Action,
        f: impl FnOnce(&mut Session, &mut Vec<GameEvent>) -> Result<(), GameError>,
    ) -> Result<Vec<GameEvent>, GameError> {
        let mut next = self.clone();
        let mut events = Vec::new();

        if let Err(err) = f(&mut next, &mut events) {
            debug!(actor = ?actor, ?action, error = %err, "action rejected");
            return Err(err);
        }

        let turn = self.turn_number;
        let sequence = self.sequence;
        next.sequence = if next.turn_number == turn { sequence + 1 } else { 0 };
        next.version += 1;
        debug!(actor = ?actor, ?action, turn, version = next.version, "action applied");
        next.history
            .push_back(ActionRecord::new(actor, action, turn, sequence));

        *self = next;
        Ok(events)
    }

    /// Fail with `StaleState` unless the session is at `expected` version.
    pub fn expect_version(&self, expected: u64) -> Result<(), GameError> {
        if self.version == expected {
            Ok(())
        } else {
            Err(GameError::StaleState {
                expected,
                actual: self.version,
            })
        }
    }

    // === Persistence codec ===

    /// Encode the session for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a session produced by [`Session::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
