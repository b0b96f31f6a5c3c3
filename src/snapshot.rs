//! Binary state snapshots.
//!
//! A snapshot is the full structural `GameState` encoded with `bincode`.
//! Decoding checks the counts and token bounds that every reachable state
//! satisfies, so a corrupted or hand-edited blob is rejected instead of
//! producing a state the engine would misbehave on.

use rustc_hash::FxHashSet;

use crate::core::{GameState, MAX_HINTS, STARTING_STRIKES};
use crate::error::SnapshotError;

/// Encode a state.
pub fn encode(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Decode and sanity-check a state.
pub fn decode(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    let state: GameState = bincode::deserialize(bytes)?;
    check(&state)?;
    Ok(state)
}

fn check(state: &GameState) -> Result<(), SnapshotError> {
    let options = &state.options;
    if options.validate().is_err() || state.players.len() != options.players_count {
        return Err(SnapshotError::Inconsistent("player count"));
    }
    if state.current_player.index() >= options.players_count {
        return Err(SnapshotError::Inconsistent("current player"));
    }

    let total = state.draw_pile.len()
        + state.discard_pile.len()
        + state.played_cards.len()
        + state.cards_in_hands();
    if total != options.deck_size() {
        return Err(SnapshotError::Inconsistent("card count"));
    }

    if state.tokens.hints > MAX_HINTS || state.tokens.strikes > STARTING_STRIKES {
        return Err(SnapshotError::Inconsistent("tokens"));
    }

    let mut played = FxHashSet::default();
    if !state.played_cards.iter().all(|card| played.insert(*card)) {
        return Err(SnapshotError::Inconsistent("played cards"));
    }

    Ok(())
}
