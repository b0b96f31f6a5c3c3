//! Per-card hint information.
//!
//! Every card held in a hand carries a [`CardHint`]: what the *other*
//! players have told its holder about it. Each color and each number has a
//! tri-state [`Marker`].
//!
//! ## Invariant
//!
//! Within one dimension (colors or numbers) at most one value is
//! `Confirmed`, and when one is, every other value in that dimension is
//! `Impossible`.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Number};
use super::config::GameOptions;

/// Belief about a single color or number value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Marker {
    Impossible = 0,
    Possible = 1,
    Confirmed = 2,
}

/// The value named by a hint: a color or a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintValue {
    Color(Color),
    Number(Number),
}

impl HintValue {
    /// Does this card carry the hinted value?
    #[must_use]
    pub fn matches(self, card: Card) -> bool {
        match self {
            HintValue::Color(color) => card.color == color,
            HintValue::Number(number) => card.number == number,
        }
    }
}

impl std::fmt::Display for HintValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintValue::Color(color) => write!(f, "color {color}"),
            HintValue::Number(number) => write!(f, "number {number}"),
        }
    }
}

/// Tri-state belief table for one card, indexed by enum discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardHint {
    pub colors: [Marker; Color::COUNT],
    pub numbers: [Marker; Number::COUNT],
}

impl CardHint {
    /// Initial belief for a freshly dealt or drawn card.
    ///
    /// Every number is possible. Every color in play is possible; the
    /// multicolor marker starts `Impossible` when that suit is not in use.
    #[must_use]
    pub fn empty(options: &GameOptions) -> Self {
        let mut colors = [Marker::Possible; Color::COUNT];
        if !options.multicolor {
            colors[Color::Multicolor.index()] = Marker::Impossible;
        }

        Self {
            colors,
            numbers: [Marker::Possible; Number::COUNT],
        }
    }

    /// Marker for a color.
    #[must_use]
    pub fn color(&self, color: Color) -> Marker {
        self.colors[color.index()]
    }

    /// Marker for a number.
    #[must_use]
    pub fn number(&self, number: Number) -> Marker {
        self.numbers[number.index()]
    }

    /// Apply a hint given about `card`, the card this belief is attached to.
    ///
    /// A positive hint confirms the hinted value and rules out its siblings.
    /// A negative hint rules out only the hinted value.
    pub fn apply(&mut self, card: Card, hint: HintValue) {
        let positive = hint.matches(card);
        match hint {
            HintValue::Color(color) => update(&mut self.colors, color.index(), positive),
            HintValue::Number(number) => update(&mut self.numbers, number.index(), positive),
        }
    }

    /// The confirmed color, if any.
    #[must_use]
    pub fn confirmed_color(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&c| self.color(c) == Marker::Confirmed)
    }

    /// The confirmed number, if any.
    #[must_use]
    pub fn confirmed_number(&self) -> Option<Number> {
        Number::ALL
            .into_iter()
            .find(|&n| self.number(n) == Marker::Confirmed)
    }
}

fn update<const N: usize>(markers: &mut [Marker; N], hinted: usize, positive: bool) {
    if positive {
        for (i, marker) in markers.iter_mut().enumerate() {
            *marker = if i == hinted {
                Marker::Confirmed
            } else {
                Marker::Impossible
            };
        }
    } else {
        markers[hinted] = Marker::Impossible;
    }
}
