//! Error types.
//!
//! Every rule violation is a recoverable error: a host can reject the
//! offending request and keep serving the game from the unchanged state.

use thiserror::Error;

use crate::core::{Card, PlayerId};

/// A rejected action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("{from} acted out of turn; it is {expected}'s turn")]
    TurnViolation { from: PlayerId, expected: PlayerId },

    #[error("hand slot {index} does not hold {expected} (found {found:?})")]
    HandConsistencyViolation {
        index: usize,
        expected: Card,
        found: Option<Card>,
    },

    #[error("no hint tokens left")]
    HintResourceViolation,

    #[error("{0} cannot give a hint to themselves")]
    SelfHintViolation(PlayerId),

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),
}

/// Invalid game options.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 5, got {0}")]
    PlayerCount(usize),
}

/// Failure to encode or decode a state snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(&'static str),
}
