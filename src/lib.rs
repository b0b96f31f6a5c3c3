//! # hanabi-engine
//!
//! A pure rules engine for a cooperative Hanabi-style card game.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `commit` takes a state and an action and returns a new
//!    state. Nothing is mutated in place and no I/O happens.
//!
//! 2. **Deterministic**: the same options and seed always deal the same
//!    game. Randomness is injected through `GameRng`.
//!
//! 3. **Recoverable errors**: illegal actions are rejected with a typed
//!    `RulesError`; the previous state stays valid.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cheap cloning via `im-rs`, so each
//!   commit only copies the branches it touches.
//!
//! - **Fixed hint tables**: per-card hint markers are arrays indexed by
//!   color and number.
//!
//! ## Modules
//!
//! - `core`: cards, hints, players, state, actions, RNG, configuration
//! - `rules`: game factory, action engine, terminal checks, scoring
//! - `error`: error types
//! - `snapshot`: binary state snapshots
//!
//! ## Example
//!
//! ```
//! use hanabi_engine::{commit_action, is_game_over, new_game, Action, GameOptions};
//!
//! let state = new_game(&GameOptions::new(3), Some(42)).unwrap();
//! let from = state.current_player;
//! let card = state.players[from.index()].hand[0].card;
//!
//! let next = commit_action(&state, &Action::Discard { from, card_index: 0, card }).unwrap();
//! assert_eq!(next.draw_pile.len(), 34);
//! assert!(!is_game_over(&next));
//! ```

pub mod core;
pub mod rules;
pub mod error;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, ActionRecord,
    Card, CardHint, Color, Number, HintValue, Marker,
    GameOptions, GameRng, GameState, Tokens,
    Hand, HeldCard, Player, PlayerId,
};

pub use crate::rules::{
    commit_action, empty_hint, is_game_over, is_playable, max_achievable_score, new_game,
    ActionEngine, GameFactory, GameOutcome, RulesEngine,
};

pub use crate::error::{ConfigError, RulesError, SnapshotError};
