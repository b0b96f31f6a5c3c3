//! Game state: the aggregate root.
//!
//! ## GameState
//!
//! Complete game state:
//! - Draw pile (top = end), discard pile, played cards
//! - Players and their hands (with per-card hint information)
//! - Tokens, current player, end-game countdown
//! - Options, seed, action history
//!
//! Uses `im` persistent data structures: cloning a state is cheap and a
//! committed action only copies the branches it touches (one hand, the
//! piles, the tokens). States handed to callers are never mutated.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::card::{Card, Color, Number};
use super::config::{GameOptions, MAX_HINTS, STARTING_STRIKES};
use super::player::{Player, PlayerId};

/// Shared token counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tokens {
    /// Hint tokens (0-8). Spent by hinting, regained by completing a color.
    pub hints: u8,

    /// Remaining strikes. Lost on a misplay; the game ends at 0.
    pub strikes: u8,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            hints: MAX_HINTS,
            strikes: STARTING_STRIKES,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Configuration ===
    /// Immutable options the game was created with.
    pub options: GameOptions,

    /// Seed the deck and seating were shuffled with.
    pub seed: u64,

    // === Cards ===
    /// Cards left to draw; the top of the pile is the last element.
    pub draw_pile: Vector<Card>,

    /// Discarded and misplayed cards, in the order they arrived.
    pub discard_pile: Vector<Card>,

    /// Successfully played cards across all colors.
    /// Never contains the same card twice.
    pub played_cards: Vector<Card>,

    // === Players ===
    /// Players in seating order.
    pub players: Vector<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    // === Progression ===
    pub tokens: Tokens,

    /// Actions remaining once the draw pile is empty.
    /// Only counts down after the last card has been drawn.
    pub actions_left: i32,

    /// Committed actions so far.
    pub turn: u32,

    /// Every committed action, oldest first.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Get player count.
    #[must_use]
    pub fn players_count(&self) -> usize {
        self.options.players_count
    }

    /// Get a player, `None` if the seat does not exist.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> Option<&Player> {
        self.player(self.current_player)
    }

    /// Current score: one point per played card.
    #[must_use]
    pub fn score(&self) -> usize {
        self.played_cards.len()
    }

    /// Has this exact card already been played?
    #[must_use]
    pub fn is_played(&self, card: Card) -> bool {
        self.played_cards.contains(&card)
    }

    /// Highest number played in each color that has been started.
    #[must_use]
    pub fn stack_heights(&self) -> FxHashMap<Color, Number> {
        let mut heights = FxHashMap::default();
        for card in &self.played_cards {
            heights
                .entry(card.color)
                .and_modify(|n: &mut Number| *n = (*n).max(card.number))
                .or_insert(card.number);
        }
        heights
    }

    /// Copies of each card in the discard pile.
    #[must_use]
    pub fn discard_counts(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for &card in &self.discard_pile {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Total cards in hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum()
    }
}
