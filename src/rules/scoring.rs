//! Score bounds.

use crate::core::{Card, GameState, Number};

/// Highest score still reachable, ignoring turn limits.
///
/// A color's stack stops at the first number that is neither played nor
/// has a copy left outside the discard pile.
#[must_use]
pub fn max_achievable_score(state: &GameState) -> usize {
    let discarded = state.discard_counts();

    state
        .options
        .colors()
        .iter()
        .map(|&color| {
            Number::ALL
                .into_iter()
                .map(|n| Card::new(color, n))
                .take_while(|&card| {
                    state.is_played(card)
                        || discarded.get(&card).copied().unwrap_or(0) < card.copies()
                })
                .count()
        })
        .sum()
}
