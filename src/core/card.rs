//! Cards: colors, numbers, and deck composition.
//!
//! Cards are plain values. Two cards with the same color and number are
//! interchangeable; the deck holds several copies of most cards.
//!
//! ## Composition
//!
//! Each base color has ten cards: three 1s, two each of 2-4 and a single 5.
//! The optional multicolor suit adds exactly one card of each number.

use serde::{Deserialize, Serialize};

/// Card color (suit).
///
/// The discriminant doubles as the index into per-color tables such as
/// [`CardHint`](crate::core::CardHint).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
    Green,
    White,
    Yellow,
    Multicolor,
}

impl Color {
    /// Number of colors, multicolor included.
    pub const COUNT: usize = 6;

    /// Every color in table order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::White,
        Color::Yellow,
        Color::Multicolor,
    ];

    /// The five colors present in every game.
    pub const BASE: [Color; 5] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::White,
        Color::Yellow,
    ];

    /// Colors in play for a game with or without the multicolor suit.
    #[must_use]
    pub fn in_play(multicolor: bool) -> &'static [Color] {
        if multicolor {
            &Self::ALL
        } else {
            &Self::BASE
        }
    }

    /// Table index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Multicolor => "multicolor",
        };
        f.write_str(name)
    }
}

/// Card number, 1 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Number {
    /// Number of distinct numbers.
    pub const COUNT: usize = 5;

    /// Every number in ascending order.
    pub const ALL: [Number; Number::COUNT] = [
        Number::One,
        Number::Two,
        Number::Three,
        Number::Four,
        Number::Five,
    ];

    /// Face value (1-5).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Parse a face value. Returns `None` outside 1-5.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=5 => Some(Self::ALL[usize::from(value - 1)]),
            _ => None,
        }
    }

    /// The number directly below this one, `None` for 1.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }

    /// Table index of this number.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Copies of this number per base color.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            Number::One => 3,
            Number::Two | Number::Three | Number::Four => 2,
            Number::Five => 1,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A card: a `(color, number)` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub number: Number,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, number: Number) -> Self {
        Self { color, number }
    }

    /// How many copies of this card a full deck contains.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self.color {
            Color::Multicolor => 1,
            _ => self.number.copies(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.number)
    }
}

/// Build the unshuffled deck.
///
/// Cards are grouped by color in table order, numbers ascending.
#[must_use]
pub fn full_deck(multicolor: bool) -> Vec<Card> {
    let mut cards = Vec::with_capacity(55);

    for &color in &Color::BASE {
        for number in Number::ALL {
            for _ in 0..number.copies() {
                cards.push(Card::new(color, number));
            }
        }
    }

    if multicolor {
        cards.extend(Number::ALL.iter().map(|&n| Card::new(Color::Multicolor, n)));
    }

    cards
}
