//! Game configuration.
//!
//! `GameOptions` is fixed at creation and travels with every state:
//! - `players_count`: 2-5 players
//! - `multicolor`: include the sixth (multicolor) suit
//!
//! Derived quantities (hand size, deck size, perfect score) live here so the
//! factory and the engine agree on them.

use serde::{Deserialize, Serialize};

use super::card::{Color, Number};
use crate::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 5;

/// Hint tokens at the start of a game, and the cap.
pub const MAX_HINTS: u8 = 8;

/// Strikes at the start of a game.
pub const STARTING_STRIKES: u8 = 3;

/// Immutable game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of players (2-5).
    pub players_count: usize,

    /// Is the multicolor suit in play?
    pub multicolor: bool,
}

impl GameOptions {
    /// Options for `players_count` players without the multicolor suit.
    ///
    /// The count is checked by [`validate`](Self::validate), which the
    /// factory calls before building a game.
    #[must_use]
    pub const fn new(players_count: usize) -> Self {
        Self {
            players_count,
            multicolor: false,
        }
    }

    /// Enable the multicolor suit.
    #[must_use]
    pub const fn with_multicolor(mut self) -> Self {
        self.multicolor = true;
        self
    }

    /// Check the player count is within 2-5.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players_count) {
            Ok(())
        } else {
            Err(ConfigError::PlayerCount(self.players_count))
        }
    }

    /// Starting hand size: 5 cards for 2-3 players, 4 for 4-5.
    #[must_use]
    pub const fn hand_size(&self) -> usize {
        if self.players_count <= 3 {
            5
        } else {
            4
        }
    }

    /// Colors in play.
    #[must_use]
    pub fn colors(&self) -> &'static [Color] {
        Color::in_play(self.multicolor)
    }

    /// Cards in a full deck (50, or 55 with multicolor).
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        if self.multicolor {
            55
        } else {
            50
        }
    }

    /// Played cards needed for a perfect game (25, or 30 with multicolor).
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.colors().len() * Number::COUNT
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}
