//! Game creation: deck, shuffle, deal.

use im::Vector;

use crate::core::{
    full_deck, Card, CardHint, GameOptions, GameRng, GameState, HeldCard, Player, PlayerId, Tokens,
};
use crate::error::ConfigError;

/// Default seat names, in seating order.
pub const PLAYER_NAMES: [&str; 5] = ["Akiyo", "Miho", "Tomoa", "Futaba", "Kai"];

/// Builder for a fresh game.
///
/// ```
/// use hanabi_engine::core::GameOptions;
/// use hanabi_engine::rules::GameFactory;
///
/// let state = GameFactory::new(GameOptions::new(3))
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.players.len(), 3);
/// assert_eq!(state.draw_pile.len(), 35);
/// ```
#[derive(Clone, Debug)]
pub struct GameFactory {
    options: GameOptions,
    seed: Option<u64>,
    names: Option<Vec<String>>,
}

impl GameFactory {
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            seed: None,
            names: None,
        }
    }

    /// Include the multicolor suit.
    pub fn multicolor(mut self, enabled: bool) -> Self {
        self.options.multicolor = enabled;
        self
    }

    /// Fix the seed. Without one, a seed is drawn from the clock and OS
    /// randomness when the game is built.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override seat names. Missing entries fall back to [`PLAYER_NAMES`].
    pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Build the initial state.
    pub fn build(self) -> Result<GameState, ConfigError> {
        let seed = self.seed.unwrap_or_else(GameRng::entropy_seed);
        self.build_with_rng(&GameRng::new(seed))
    }

    /// Build the initial state from an explicit randomness source.
    ///
    /// The deck and the seating order are shuffled by two independent
    /// streams derived from `rng`.
    pub fn build_with_rng(self, rng: &GameRng) -> Result<GameState, ConfigError> {
        let options = self.options;
        options.validate()?;

        let mut deck = full_deck(options.multicolor);
        rng.for_context("deck").shuffle(&mut deck);

        let mut seating: Vec<PlayerId> = PlayerId::all(options.players_count).collect();
        rng.for_context("seating").shuffle(&mut seating);
        let first = seating[0];

        let hand_size = options.hand_size();
        let hint = CardHint::empty(&options);
        let mut draw_pile: Vector<Card> = deck.into_iter().collect();

        let players: Vector<Player> = PlayerId::all(options.players_count)
            .map(|id| {
                let rest = draw_pile.split_off(hand_size);
                let dealt = std::mem::replace(&mut draw_pile, rest);

                let name = self
                    .names
                    .as_ref()
                    .and_then(|names| names.get(id.index()).cloned())
                    .unwrap_or_else(|| PLAYER_NAMES[id.index()].to_string());

                Player {
                    id,
                    name,
                    hand: dealt.into_iter().map(|card| HeldCard::new(card, hint)).collect(),
                }
            })
            .collect();

        Ok(GameState {
            options,
            seed: rng.seed(),
            draw_pile,
            discard_pile: Vector::new(),
            played_cards: Vector::new(),
            players,
            current_player: first,
            tokens: Tokens::default(),
            actions_left: options.players_count as i32 + 1,
            turn: 0,
            history: Vector::new(),
        })
    }
}

/// Build a new game from `options`, deterministic when `seed` is given.
pub fn new_game(options: &GameOptions, seed: Option<u64>) -> Result<GameState, ConfigError> {
    let factory = GameFactory::new(*options);
    match seed {
        Some(seed) => factory.seed(seed).build(),
        None => factory.build(),
    }
}

/// The initial belief state for a card entering a hand.
#[must_use]
pub fn empty_hint(options: &GameOptions) -> CardHint {
    CardHint::empty(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Marker};

    #[test]
    fn test_fresh_game_shape() {
        for players_count in 2..=5 {
            for multicolor in [false, true] {
                let options = GameOptions {
                    players_count,
                    multicolor,
                };
                let state = new_game(&options, Some(42)).unwrap();

                assert_eq!(state.players.len(), players_count);
                for player in &state.players {
                    assert_eq!(player.hand.len(), options.hand_size());
                }
                assert_eq!(
                    state.cards_in_hands() + state.draw_pile.len(),
                    options.deck_size()
                );
                assert_eq!(state.tokens, Tokens { hints: 8, strikes: 3 });
                assert!(state.played_cards.is_empty());
                assert!(state.discard_pile.is_empty());
                assert_eq!(state.actions_left, players_count as i32 + 1);
                assert!(state.current_player.index() < players_count);
            }
        }
    }

    #[test]
    fn test_invalid_player_count() {
        assert_eq!(
            new_game(&GameOptions::new(1), Some(1)),
            Err(ConfigError::PlayerCount(1))
        );
        assert_eq!(
            new_game(&GameOptions::new(6), Some(1)),
            Err(ConfigError::PlayerCount(6))
        );
    }

    #[test]
    fn test_same_seed_same_game() {
        let options = GameOptions::new(4).with_multicolor();
        let a = new_game(&options, Some(1234)).unwrap();
        let b = new_game(&options, Some(1234)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 1234);
    }

    #[test]
    fn test_different_seeds_differ() {
        let options = GameOptions::new(3);
        let a = new_game(&options, Some(1)).unwrap();
        let b = new_game(&options, Some(2)).unwrap();
        assert_ne!(a.draw_pile, b.draw_pile);
    }

    #[test]
    fn test_unseeded_game_is_valid() {
        let state = new_game(&GameOptions::new(2), None).unwrap();
        assert_eq!(state.cards_in_hands() + state.draw_pile.len(), 50);
    }

    #[test]
    fn test_hands_start_with_empty_hints() {
        let state = new_game(&GameOptions::new(3), Some(9)).unwrap();
        for player in &state.players {
            for held in &player.hand {
                assert_eq!(held.hint.color(Color::Multicolor), Marker::Impossible);
                assert_eq!(held.hint, empty_hint(&state.options));
            }
        }
    }

    #[test]
    fn test_default_and_custom_names() {
        let state = new_game(&GameOptions::new(5), Some(3)).unwrap();
        let names: Vec<_> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, PLAYER_NAMES);

        let state = GameFactory::new(GameOptions::new(3))
            .names(["Ann", "Bo"])
            .seed(3)
            .build()
            .unwrap();
        let names: Vec<_> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bo", "Tomoa"]);
    }

    #[test]
    fn test_deal_takes_from_front_of_shuffled_deck() {
        let options = GameOptions::new(2);
        let rng = GameRng::new(77);
        let mut deck = full_deck(false);
        rng.for_context("deck").shuffle(&mut deck);

        let state = GameFactory::new(options).build_with_rng(&rng).unwrap();

        let dealt: Vec<Card> = state.players.iter().flat_map(|p| p.cards().collect::<Vec<_>>()).collect();
        assert_eq!(dealt, deck[..10]);
        assert_eq!(state.draw_pile.iter().copied().collect::<Vec<_>>(), deck[10..]);
    }
}
