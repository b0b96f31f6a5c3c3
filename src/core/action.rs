//! Actions and the action log.
//!
//! An [`Action`] is what a player proposes on their turn: play a card,
//! discard a card, or give a hint to another player. Play and discard name
//! both the hand index and the card expected there, so a request built from
//! a stale view of the hand is rejected instead of moving the wrong card.
//!
//! Every committed action is recorded as an [`ActionRecord`] together with
//! its [`ActionOutcome`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::hint::HintValue;
use super::player::PlayerId;

/// A proposed player action.
///
/// ## Example
///
/// ```
/// use hanabi_engine::core::{Action, Card, Color, HintValue, Number, PlayerId};
///
/// let play = Action::Play {
///     from: PlayerId::new(0),
///     card_index: 2,
///     card: Card::new(Color::Red, Number::One),
/// };
/// assert_eq!(play.actor(), PlayerId::new(0));
///
/// let hint = Action::Hint {
///     from: PlayerId::new(1),
///     to: PlayerId::new(0),
///     hint: HintValue::Number(Number::Five),
/// };
/// assert!(hint.is_hint());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Play the card at `card_index` onto its color's stack.
    Play {
        from: PlayerId,
        card_index: usize,
        card: Card,
    },
    /// Discard the card at `card_index`.
    Discard {
        from: PlayerId,
        card_index: usize,
        card: Card,
    },
    /// Tell `to` which of their cards carry `hint`.
    Hint {
        from: PlayerId,
        to: PlayerId,
        hint: HintValue,
    },
}

impl Action {
    /// The acting player.
    #[must_use]
    pub fn actor(&self) -> PlayerId {
        match *self {
            Action::Play { from, .. } | Action::Discard { from, .. } | Action::Hint { from, .. } => {
                from
            }
        }
    }

    /// Check if this is a hint.
    #[must_use]
    pub fn is_hint(&self) -> bool {
        matches!(self, Action::Hint { .. })
    }
}

/// Hand positions touched by a hint. Hands never exceed five cards.
pub type Touched = SmallVec<[usize; 5]>;

/// What committing an action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The card went to the discard pile.
    Discarded,
    /// The card extended its color's stack.
    Played,
    /// The card could not be played; a strike was lost.
    Misplayed,
    /// A hint was given; `touched` lists the matching hand positions.
    Hinted { touched: Touched },
}

/// A committed action with metadata for history tracking.
///
/// Used for replay, debugging and post-game review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// What happened.
    pub outcome: ActionOutcome,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, turn: u32, outcome: ActionOutcome) -> Self {
        Self {
            player: action.actor(),
            action,
            turn,
            outcome,
        }
    }
}
