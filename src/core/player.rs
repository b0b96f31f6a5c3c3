//! Players and their hands.
//!
//! ## PlayerId
//!
//! Type-safe seat index, 0-based.
//!
//! ## Hand
//!
//! An ordered `im::Vector` of [`HeldCard`]s. Position 0 is the newest card:
//! draws are pushed to the front. Indices in play/discard actions refer to
//! this order.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::hint::CardHint;

/// Seat index of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player seated after this one.
    #[must_use]
    pub fn next(self, players_count: usize) -> Self {
        Self(((self.index() + 1) % players_count) as u8)
    }

    /// Iterate over all player IDs for a game with `players_count` players.
    ///
    /// ```
    /// use hanabi_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(players_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..players_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A card in a hand, with what the other players have revealed about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeldCard {
    pub card: Card,
    pub hint: CardHint,
}

impl HeldCard {
    #[must_use]
    pub const fn new(card: Card, hint: CardHint) -> Self {
        Self { card, hint }
    }
}

/// Ordered hand, newest card first.
pub type Hand = Vector<HeldCard>;

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Hand,
}

impl Player {
    /// A player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
        }
    }

    /// The cards in hand, without hint information.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand.iter().map(|held| held.card)
    }

    /// Add a freshly drawn card at the front of the hand.
    pub fn receive(&mut self, card: Card, hint: CardHint) {
        self.hand.push_front(HeldCard::new(card, hint));
    }
}
