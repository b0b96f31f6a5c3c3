//! Rules engine trait.
//!
//! The engine is a pure function from `(state, action)` to a new state:
//! - `commit`: validate and apply one action
//! - `is_game_over`: terminal check, evaluated by the caller after each commit
//! - `legal_actions`: every action `commit` would accept right now

use crate::core::action::Action;
use crate::core::state::GameState;
use crate::error::RulesError;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every color was completed.
    Perfect { score: usize },
    /// The last strike was lost.
    Struck { score: usize },
    /// The final round after the draw pile ran out is over.
    Exhausted { score: usize },
}

impl GameOutcome {
    /// Final score.
    #[must_use]
    pub fn score(&self) -> usize {
        match *self {
            GameOutcome::Perfect { score }
            | GameOutcome::Struck { score }
            | GameOutcome::Exhausted { score } => score,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `commit` never mutates its input; a rejected action returns an error
///   and the caller keeps using the previous state.
/// - `commit` does not refuse terminal states. The orchestrator checks
///   `is_game_over` and stops.
pub trait RulesEngine {
    /// Validate `action` against `state` and return the resulting state.
    fn commit(&self, state: &GameState, action: &Action) -> Result<GameState, RulesError>;

    /// Check if the game is over.
    fn is_game_over(&self, state: &GameState) -> bool;

    /// Enumerate every action the current player may commit.
    ///
    /// Returns empty once the game is over.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    // === Convenience Methods ===

    /// Classify a finished game. Returns `None` while the game continues.
    fn outcome(&self, state: &GameState) -> Option<GameOutcome> {
        if !self.is_game_over(state) {
            return None;
        }

        let score = state.score();
        Some(if state.tokens.strikes == 0 {
            GameOutcome::Struck { score }
        } else if score == state.options.max_score() {
            GameOutcome::Perfect { score }
        } else {
            GameOutcome::Exhausted { score }
        })
    }

    /// Commit a sequence of actions, stopping at the first rejected one.
    fn replay<'a>(
        &self,
        state: &GameState,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<GameState, RulesError> {
        let mut current = state.clone();
        for action in actions {
            current = self.commit(&current, action)?;
        }
        Ok(current)
    }
}
