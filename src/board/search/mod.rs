//! Computer opponent: fixed-depth minimax over the legal move tree.
//!
//! The search is synchronous. It can be interrupted through a [`StopFlag`] or
//! a deadline, and then returns the best move it finished scoring.
//! [`crate::engine::BackgroundSearch`] runs it on a worker thread.

pub mod constants;
mod minimax;
mod move_order;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Color, Move};
use crate::sync::StopFlag;

pub use constants::{MATE_SCORE, MATE_THRESHOLD};

/// Shared slot holding the best root move found so far
pub type BestMoveSlot = Arc<Mutex<Option<Move>>>;

/// Strength of the computer opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth in plies
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// How deep and how long a search may run.
#[derive(Clone, Debug)]
pub struct SearchLimits {
    pub depth: u32,
    pub deadline: Option<Instant>,
    pub stop: StopFlag,
    pub best_so_far: Option<BestMoveSlot>,
}

impl SearchLimits {
    /// Search to `depth` plies with no time limit
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            deadline: None,
            stop: StopFlag::new(),
            best_so_far: None,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    #[must_use]
    pub fn with_best_so_far(mut self, slot: BestMoveSlot) -> Self {
        self.best_so_far = Some(slot);
        self
    }

    fn publish(&self, mv: Move) {
        if let Some(slot) = &self.best_so_far {
            *slot.lock() = Some(mv);
        }
    }
}

impl From<Difficulty> for SearchLimits {
    fn from(difficulty: Difficulty) -> Self {
        SearchLimits::depth(difficulty.depth())
    }
}

/// Outcome of a search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal moves (or it was not `color`'s turn)
    pub best_move: Option<Move>,
    /// Score of `best_move`, White positive
    pub score: i32,
    pub depth: u32,
    pub nodes: u64,
    /// The search was cut short by the stop flag or deadline
    pub stopped: bool,
    pub elapsed: Duration,
}

impl SearchResult {
    fn exhausted() -> Self {
        SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether `score` announces a forced mate
    #[must_use]
    pub fn is_mate_score(&self) -> bool {
        self.score.abs() >= MATE_THRESHOLD
    }
}

/// Search `board` for `color` within `limits`.
///
/// `color` must be the side to move; otherwise nothing is searched and the
/// result carries no move.
#[must_use]
pub fn search(board: &Board, color: Color, limits: &SearchLimits) -> SearchResult {
    if color != board.side_to_move() {
        log::warn!(
            "search requested for {color} but {} is to move",
            board.side_to_move()
        );
        return SearchResult::exhausted();
    }

    let result = minimax::Searcher::new(limits).search_root(board);
    if result.stopped {
        log::warn!(
            "search stopped early after {} nodes, best so far {:?}",
            result.nodes,
            result.best_move
        );
    }
    log::debug!(
        "searched depth {} nodes {} best {} score {} in {:?}",
        result.depth,
        result.nodes,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string()),
        result.score,
        result.elapsed
    );
    result
}

/// Best move for `color` at `difficulty`, or `None` when there is no legal move.
#[must_use]
pub fn best_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
    search(board, color, &SearchLimits::from(difficulty)).best_move
}
