//! Core engine types: cards, hints, players, state, actions, RNG, configuration.
//!
//! These are plain data. The rules that move a state forward live in
//! [`crate::rules`].

pub mod card;
pub mod hint;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use card::{full_deck, Card, Color, Number};
pub use hint::{CardHint, HintValue, Marker};
pub use player::{Hand, HeldCard, Player, PlayerId};
pub use rng::GameRng;
pub use config::{GameOptions, MAX_HINTS, MAX_PLAYERS, MIN_PLAYERS, STARTING_STRIKES};
pub use action::{Action, ActionOutcome, ActionRecord, Touched};
pub use state::{GameState, Tokens};
