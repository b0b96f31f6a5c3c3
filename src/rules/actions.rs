//! The action engine: validating and applying player actions.

use im::Vector;
use smallvec::SmallVec;

use crate::core::{
    Action, ActionOutcome, ActionRecord, Card, CardHint, Color, GameState, Hand, HintValue,
    Number, PlayerId, Touched, MAX_HINTS,
};
use crate::error::RulesError;

use super::engine::RulesEngine;

/// Stateless Hanabi rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionEngine;

impl RulesEngine for ActionEngine {
    fn commit(&self, state: &GameState, action: &Action) -> Result<GameState, RulesError> {
        let from = action.actor();
        if from != state.current_player {
            return Err(RulesError::TurnViolation {
                from,
                expected: state.current_player,
            });
        }

        let mut next = state.clone();

        let outcome = match *action {
            Action::Discard {
                card_index, card, ..
            } => {
                take_card(&mut next, from, card_index, card)?;
                next.discard_pile.push_back(card);
                draw(&mut next, from);
                ActionOutcome::Discarded
            }
            Action::Play {
                card_index, card, ..
            } => {
                take_card(&mut next, from, card_index, card)?;
                let outcome = if is_playable(card, &next.played_cards) {
                    next.played_cards.push_back(card);
                    if card.number == Number::Five {
                        next.tokens.hints =
                            next.tokens.hints.saturating_add(1).min(MAX_HINTS);
                    }
                    ActionOutcome::Played
                } else {
                    next.tokens.strikes = next.tokens.strikes.saturating_sub(1);
                    next.discard_pile.push_back(card);
                    ActionOutcome::Misplayed
                };
                draw(&mut next, from);
                outcome
            }
            Action::Hint { to, hint, .. } => {
                if next.tokens.hints == 0 {
                    return Err(RulesError::HintResourceViolation);
                }
                if to == from {
                    return Err(RulesError::SelfHintViolation(from));
                }
                let target = next
                    .players
                    .get_mut(to.index())
                    .ok_or(RulesError::UnknownPlayer(to))?;

                next.tokens.hints -= 1;
                let touched = apply_hint(&mut target.hand, hint);
                ActionOutcome::Hinted { touched }
            }
        };

        // The turn that draws the last card already counts down.
        if next.draw_pile.is_empty() {
            next.actions_left -= 1;
        }

        next.turn += 1;
        next.history
            .push_back(ActionRecord::new(*action, next.turn, outcome));
        next.current_player = from.next(next.players_count());

        Ok(next)
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        state.actions_left <= 0
            || state.tokens.strikes == 0
            || state.played_cards.len() == state.options.max_score()
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if self.is_game_over(state) {
            return Vec::new();
        }
        let from = state.current_player;
        let Some(player) = state.player(from) else {
            return Vec::new();
        };

        let mut actions = Vec::new();

        for (card_index, held) in player.hand.iter().enumerate() {
            let card = held.card;
            actions.push(Action::Play {
                from,
                card_index,
                card,
            });
            actions.push(Action::Discard {
                from,
                card_index,
                card,
            });
        }

        if state.tokens.hints > 0 {
            for target in state.players.iter().filter(|p| p.id != from) {
                for hint in hint_values(target.cards()) {
                    actions.push(Action::Hint {
                        from,
                        to: target.id,
                        hint,
                    });
                }
            }
        }

        actions
    }
}

/// Can `card` be placed on its color's stack?
///
/// True iff it is a 1 or its predecessor in the same color has been
/// played, and an identical card has not been played already.
#[must_use]
pub fn is_playable(card: Card, played: &Vector<Card>) -> bool {
    let predecessor_here = match card.number.prev() {
        None => true,
        Some(prev) => played.contains(&Card::new(card.color, prev)),
    };

    predecessor_here && !played.contains(&card)
}

/// Remove the card at `index` from `player`'s hand, checking it is `expected`.
///
/// On mismatch the hand is left untouched.
fn take_card(
    state: &mut GameState,
    player: PlayerId,
    index: usize,
    expected: Card,
) -> Result<(), RulesError> {
    let hand = &mut state
        .players
        .get_mut(player.index())
        .ok_or(RulesError::UnknownPlayer(player))?
        .hand;

    let found = hand.get(index).map(|held| held.card);
    if found != Some(expected) {
        return Err(RulesError::HandConsistencyViolation {
            index,
            expected,
            found,
        });
    }

    hand.remove(index);
    Ok(())
}

/// Give `player` the top card of the draw pile, if any.
fn draw(state: &mut GameState, player: PlayerId) {
    let Some(card) = state.draw_pile.pop_back() else {
        return;
    };
    let hint = CardHint::empty(&state.options);
    if let Some(p) = state.players.get_mut(player.index()) {
        p.receive(card, hint);
    }
}

/// Update every card's hint in `hand`, returning the positions that matched.
fn apply_hint(hand: &mut Hand, hint: HintValue) -> Touched {
    let mut touched = SmallVec::new();
    for (i, held) in hand.iter_mut().enumerate() {
        held.hint.apply(held.card, hint);
        if hint.matches(held.card) {
            touched.push(i);
        }
    }
    touched
}

/// Distinct hints that name at least one of `cards`, colors first.
fn hint_values(cards: impl Iterator<Item = Card>) -> Vec<HintValue> {
    let mut seen_colors = [false; Color::COUNT];
    let mut seen_numbers = [false; Number::COUNT];
    for card in cards {
        seen_colors[card.color.index()] = true;
        seen_numbers[card.number.index()] = true;
    }

    let colors = Color::ALL
        .into_iter()
        .filter(|c| seen_colors[c.index()])
        .map(HintValue::Color);
    let numbers = Number::ALL
        .into_iter()
        .filter(|n| seen_numbers[n.index()])
        .map(HintValue::Number);

    colors.chain(numbers).collect()
}

/// Commit an action with the standard rules.
pub fn commit_action(state: &GameState, action: &Action) -> Result<GameState, RulesError> {
    ActionEngine.commit(state, action)
}

/// Check if the game is over under the standard rules.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    ActionEngine.is_game_over(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameOptions, Marker};
    use crate::rules::factory::new_game;

    fn card(color: Color, n: u8) -> Card {
        Card::new(color, Number::from_value(n).unwrap())
    }

    fn game(players: usize) -> GameState {
        new_game(&GameOptions::new(players), Some(42)).unwrap()
    }

    fn first_card(state: &GameState, player: PlayerId) -> Card {
        state.player(player).unwrap().hand[0].card
    }

    #[test]
    fn test_is_playable() {
        let mut played = Vector::new();
        assert!(is_playable(card(Color::Red, 1), &played));
        assert!(!is_playable(card(Color::Red, 2), &played));

        played.push_back(card(Color::Red, 1));
        assert!(!is_playable(card(Color::Red, 1), &played));
        assert!(is_playable(card(Color::Red, 2), &played));
        assert!(!is_playable(card(Color::Blue, 2), &played));
        assert!(!is_playable(card(Color::Red, 3), &played));
    }

    #[test]
    fn test_discard_three_players() {
        let state = game(3);
        let from = state.current_player;
        let discarded = first_card(&state, from);

        let next = commit_action(
            &state,
            &Action::Discard {
                from,
                card_index: 0,
                card: discarded,
            },
        )
        .unwrap();

        assert_eq!(next.draw_pile.len(), 34);
        assert_eq!(next.player(from).unwrap().hand.len(), 5);
        assert_eq!(first_card(&next, from), *state.draw_pile.last().unwrap());
        assert_eq!(next.discard_pile, Vector::unit(discarded));
        assert_eq!(next.actions_left, 4);
        assert_eq!(next.current_player, from.next(3));

        // Input untouched
        assert_eq!(state.draw_pile.len(), 35);
        assert!(state.discard_pile.is_empty());
    }

    #[test]
    fn test_turn_violation() {
        let state = game(2);
        let other = state.current_player.next(2);
        let err = commit_action(
            &state,
            &Action::Discard {
                from: other,
                card_index: 0,
                card: first_card(&state, other),
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            RulesError::TurnViolation {
                from: other,
                expected: state.current_player
            }
        );
    }

    #[test]
    fn test_hand_consistency_violation() {
        let state = game(2);
        let from = state.current_player;
        let hand = &state.player(from).unwrap().hand;
        let wrong = Color::ALL
            .into_iter()
            .map(|c| card(c, 5))
            .find(|c| *c != hand[0].card)
            .unwrap();

        let err = commit_action(
            &state,
            &Action::Play {
                from,
                card_index: 0,
                card: wrong,
            },
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::HandConsistencyViolation { index: 0, .. }));

        let err = commit_action(
            &state,
            &Action::Play {
                from,
                card_index: 9,
                card: hand[0].card,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            RulesError::HandConsistencyViolation {
                index: 9,
                expected: hand[0].card,
                found: None
            }
        );
    }

    #[test]
    fn test_misplay_costs_a_strike() {
        let mut state = game(3);
        let from = state.current_player;
        let three = card(Color::Green, 3);
        state.players[from.index()].hand[0].card = three;

        let next = commit_action(
            &state,
            &Action::Play {
                from,
                card_index: 0,
                card: three,
            },
        )
        .unwrap();

        assert_eq!(next.tokens.strikes, 2);
        assert!(next.played_cards.is_empty());
        assert_eq!(next.discard_pile, Vector::unit(three));
        assert_eq!(next.history.last().unwrap().outcome, ActionOutcome::Misplayed);
    }

    #[test]
    fn test_playing_a_five_regains_a_hint_up_to_the_cap() {
        let mut state = game(2);
        let from = state.current_player;
        let five = card(Color::Red, 5);
        for n in 1..=4 {
            state.played_cards.push_back(card(Color::Red, n));
        }
        state.players[from.index()].hand[0].card = five;

        let play = Action::Play {
            from,
            card_index: 0,
            card: five,
        };

        let capped = commit_action(&state, &play).unwrap();
        assert_eq!(capped.tokens.hints, 8);
        assert_eq!(capped.score(), 5);

        state.tokens.hints = 5;
        let next = commit_action(&state, &play).unwrap();
        assert_eq!(next.tokens.hints, 6);
    }

    #[test]
    fn test_hint_updates_target_hand() {
        let state = game(2);
        let from = state.current_player;
        let to = from.next(2);
        let target = state.player(to).unwrap();
        let color = target.hand[0].card.color;

        let next = commit_action(
            &state,
            &Action::Hint {
                from,
                to,
                hint: HintValue::Color(color),
            },
        )
        .unwrap();

        assert_eq!(next.tokens.hints, 7);
        assert_eq!(next.draw_pile.len(), state.draw_pile.len());

        let expected: Touched = target
            .hand
            .iter()
            .enumerate()
            .filter(|(_, h)| h.card.color == color)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(
            next.history.last().unwrap().outcome,
            ActionOutcome::Hinted {
                touched: expected.clone()
            }
        );

        for (i, held) in next.player(to).unwrap().hand.iter().enumerate() {
            if expected.contains(&i) {
                assert_eq!(held.hint.confirmed_color(), Some(color));
            } else {
                assert_eq!(held.hint.color(color), Marker::Impossible);
                assert_eq!(held.hint.confirmed_color(), None);
            }
        }
    }

    #[test]
    fn test_hint_violations() {
        let mut state = game(2);
        let from = state.current_player;
        let self_hint = Action::Hint {
            from,
            to: from,
            hint: HintValue::Number(Number::One),
        };
        assert_eq!(
            commit_action(&state, &self_hint),
            Err(RulesError::SelfHintViolation(from))
        );

        let stranger = Action::Hint {
            from,
            to: PlayerId::new(4),
            hint: HintValue::Number(Number::One),
        };
        assert_eq!(
            commit_action(&state, &stranger),
            Err(RulesError::UnknownPlayer(PlayerId::new(4)))
        );

        state.tokens.hints = 0;
        let hint = Action::Hint {
            from,
            to: from.next(2),
            hint: HintValue::Number(Number::One),
        };
        assert_eq!(
            commit_action(&state, &hint),
            Err(RulesError::HintResourceViolation)
        );
    }

    #[test]
    fn test_countdown_after_pile_runs_out() {
        let mut state = game(2);
        let rest = state.draw_pile.len() - 1;
        state.draw_pile = state.draw_pile.split_off(rest);
        assert_eq!(state.draw_pile.len(), 1);

        let mut current = state;
        let mut expected_actions_left = 3;
        for _ in 0..3 {
            let from = current.current_player;
            let discard = Action::Discard {
                from,
                card_index: 0,
                card: first_card(&current, from),
            };
            current = commit_action(&current, &discard).unwrap();
            expected_actions_left -= 1;
            assert_eq!(current.actions_left, expected_actions_left);
        }

        assert!(current.draw_pile.is_empty());
        assert!(is_game_over(&current));
        assert_eq!(
            ActionEngine.outcome(&current),
            Some(crate::rules::GameOutcome::Exhausted { score: 0 })
        );
    }

    #[test]
    fn test_hand_shrinks_when_pile_empty() {
        let mut state = game(2);
        state.draw_pile = Vector::new();
        let from = state.current_player;

        let next = commit_action(
            &state,
            &Action::Discard {
                from,
                card_index: 2,
                card: state.player(from).unwrap().hand[2].card,
            },
        )
        .unwrap();

        assert_eq!(next.player(from).unwrap().hand.len(), 4);
        assert_eq!(next.actions_left, 2);
    }

    #[test]
    fn test_game_over_conditions() {
        let state = game(2);
        assert!(!is_game_over(&state));

        let mut struck = state.clone();
        struck.tokens.strikes = 0;
        assert!(is_game_over(&struck));
        assert_eq!(
            ActionEngine.outcome(&struck),
            Some(crate::rules::GameOutcome::Struck { score: 0 })
        );

        let mut perfect = state.clone();
        for &color in &Color::BASE {
            for n in Number::ALL {
                perfect.played_cards.push_back(Card::new(color, n));
            }
        }
        assert!(is_game_over(&perfect));
        assert_eq!(
            ActionEngine.outcome(&perfect),
            Some(crate::rules::GameOutcome::Perfect { score: 25 })
        );

        let mut out_of_time = state;
        out_of_time.actions_left = 0;
        assert!(is_game_over(&out_of_time));
    }

    #[test]
    fn test_multicolor_game_over_needs_thirty() {
        let mut state = new_game(&GameOptions::new(3).with_multicolor(), Some(5)).unwrap();
        for &color in &Color::BASE {
            for n in Number::ALL {
                state.played_cards.push_back(Card::new(color, n));
            }
        }
        assert_eq!(state.score(), 25);
        assert!(!is_game_over(&state));
        assert_eq!(ActionEngine.outcome(&state), None);

        for n in Number::ALL {
            state
                .played_cards
                .push_back(Card::new(Color::Multicolor, n));
        }
        assert!(is_game_over(&state));
        assert_eq!(
            ActionEngine.outcome(&state),
            Some(crate::rules::GameOutcome::Perfect { score: 30 })
        );
    }

    #[test]
    fn test_legal_actions_are_accepted() {
        let state = game(3);
        let actions = ActionEngine.legal_actions(&state);

        // 5 plays + 5 discards + at least one hint per other player
        assert!(actions.len() >= 12);
        for action in &actions {
            assert!(commit_action(&state, action).is_ok(), "{action:?}");
        }

        let mut no_hints = state;
        no_hints.tokens.hints = 0;
        assert!(ActionEngine
            .legal_actions(&no_hints)
            .iter()
            .all(|a| !a.is_hint()));
    }
}
