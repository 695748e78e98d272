//! Check, checkmate and stalemate classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Board;

/// Outcome state of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    DrawByRepetition,
}

impl GameStatus {
    /// No further moves may be played
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::DrawByRepetition
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

impl Board {
    /// Status of the side to move, ignoring repetition.
    ///
    /// Use [`crate::history::status`] when a game history is available.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.side_to_move);
        match (in_check, self.has_legal_moves()) {
            (true, false) => GameStatus::Checkmate,
            (true, true) => GameStatus::Check,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Playing,
        }
    }
}
