//! Game rules.
//!
//! - `factory`: build a fresh game from options and a seed
//! - `actions`: the `ActionEngine` that validates and applies actions
//! - `engine`: the `RulesEngine` trait and game outcomes
//! - `scoring`: score bounds

pub mod engine;
pub mod factory;
pub mod actions;
pub mod scoring;

pub use engine::{GameOutcome, RulesEngine};
pub use factory::{empty_hint, new_game, GameFactory, PLAYER_NAMES};
pub use actions::{commit_action, is_game_over, is_playable, ActionEngine};
pub use scoring::max_achievable_score;
