//! Navigable move history.
//!
//! The history keeps the starting board and one entry per move played. A
//! cursor (`current`) selects the position being viewed; `None` is the
//! starting position. Appending while the cursor is behind the tail first
//! discards the abandoned future.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, GameStatus, Move, PositionKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History index {index} out of range ({len} moves)")]
    OutOfRange { index: usize, len: usize },
}

/// One move played, with the position it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub mv: Move,
    pub board_after: Board,
    pub notation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveHistory {
    initial: Board,
    entries: Vec<HistoryEntry>,
    current: Option<usize>,
}

impl MoveHistory {
    #[must_use]
    pub fn new(initial: Board) -> Self {
        MoveHistory {
            initial,
            entries: Vec::new(),
            current: None,
        }
    }

    /// Add `entry` after the current position and make it current.
    pub fn append(&mut self, entry: HistoryEntry) {
        let keep = self.current.map_or(0, |idx| idx + 1);
        if keep < self.entries.len() {
            log::debug!(
                "history: dropping {} moves after position {keep}",
                self.entries.len() - keep
            );
            self.entries.truncate(keep);
        }
        self.entries.push(entry);
        self.current = Some(self.entries.len() - 1);
    }

    /// Move the cursor. `None` selects the starting position.
    pub fn go_to(&mut self, index: Option<usize>) -> Result<(), HistoryError> {
        if let Some(idx) = index {
            if idx >= self.entries.len() {
                return Err(HistoryError::OutOfRange {
                    index: idx,
                    len: self.entries.len(),
                });
            }
        }
        self.current = index;
        Ok(())
    }

    /// Step back one move. Returns false at the start.
    pub fn back(&mut self) -> bool {
        match self.current {
            Some(idx) => {
                self.current = idx.checked_sub(1);
                true
            }
            None => false,
        }
    }

    /// Step forward one move. Returns false at the tail.
    pub fn forward(&mut self) -> bool {
        let next = self.current.map_or(0, |idx| idx + 1);
        if next < self.entries.len() {
            self.current = Some(next);
            true
        } else {
            false
        }
    }

    pub fn to_start(&mut self) {
        self.current = None;
    }

    pub fn to_end(&mut self) {
        self.current = self.entries.len().checked_sub(1);
    }

    /// Position selected by the cursor
    #[must_use]
    pub fn current_board(&self) -> &Board {
        self.current
            .and_then(|idx| self.entries.get(idx))
            .map_or(&self.initial, |entry| &entry.board_after)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn is_at_tail(&self) -> bool {
        self.current == self.entries.len().checked_sub(1)
    }

    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent move on the active line
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.current
            .and_then(|idx| self.entries.get(idx))
            .map(|entry| &entry.mv)
    }

    /// Positions from the start up to and including the cursor
    pub fn active_positions(&self) -> impl Iterator<Item = &Board> + '_ {
        let active = self.current.map_or(0, |idx| idx + 1);
        std::iter::once(&self.initial).chain(self.entries[..active].iter().map(|e| &e.board_after))
    }

    /// How often `key` occurs on the active line
    #[must_use]
    pub fn occurrences(&self, key: &PositionKey) -> usize {
        self.active_positions()
            .filter(|board| board.position_key() == *key)
            .count()
    }
}

/// Status of `board` as reached through `history`.
///
/// Counts `board` once plus its earlier occurrences on the active line; a
/// third occurrence is a draw by repetition. `board` may already be the
/// history's current position, in which case it is not counted twice.
#[must_use]
pub fn status(board: &Board, history: &MoveHistory) -> GameStatus {
    let key = board.position_key();
    let mut seen = history.occurrences(&key);
    if history.current_board().position_key() != key {
        seen += 1;
    }
    if seen >= 3 {
        return GameStatus::DrawByRepetition;
    }
    board.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::notation::notate_move;
    use crate::board::Square;

    fn play(history: &mut MoveHistory, from: &str, to: &str) {
        let board = *history.current_board();
        let mv = board
            .find_move(from.parse().unwrap(), to.parse().unwrap(), None)
            .unwrap();
        let board_after = board.apply(&mv);
        let notation = notate_move(&mv, board_after.status());
        history.append(HistoryEntry {
            mv,
            board_after,
            notation,
        });
    }

    #[test]
    fn test_append_advances_cursor() {
        let mut history = MoveHistory::new(Board::new());
        assert!(history.is_at_tail());
        play(&mut history, "e2", "e4");
        play(&mut history, "e7", "e5");
        assert_eq!(history.current_index(), Some(1));
        assert_eq!(history.entries()[0].notation, "e4");
        assert!(history.is_at_tail());
    }

    #[test]
    fn test_append_after_going_back_truncates() {
        let mut history = MoveHistory::new(Board::new());
        play(&mut history, "e2", "e4");
        play(&mut history, "e7", "e5");
        play(&mut history, "g1", "f3");
        history.go_to(Some(0)).unwrap();
        assert!(!history.is_at_tail());

        play(&mut history, "c7", "c5");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].notation, "c5");
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn test_navigation() {
        let mut history = MoveHistory::new(Board::new());
        play(&mut history, "e2", "e4");
        play(&mut history, "e7", "e5");

        history.to_start();
        assert_eq!(history.current_board(), &Board::new());
        assert!(!history.back());
        assert!(history.forward());
        assert_eq!(
            history.current_board().piece_at(Square(3, 4)).map(|p| p.kind),
            Some(crate::board::PieceKind::Pawn)
        );
        history.to_end();
        assert!(!history.forward());
        assert!(history.back());
        assert_eq!(history.current_index(), Some(0));
        assert!(history.back());
        assert_eq!(history.current_index(), None);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut history = MoveHistory::new(Board::new());
        play(&mut history, "e2", "e4");
        assert_eq!(
            history.go_to(Some(5)),
            Err(HistoryError::OutOfRange { index: 5, len: 1 })
        );
        assert_eq!(history.current_index(), Some(0));
        assert!(history.go_to(None).is_ok());
    }

    #[test]
    fn test_occurrences_follow_active_line() {
        let mut history = MoveHistory::new(Board::new());
        play(&mut history, "g1", "f3");
        play(&mut history, "g8", "f6");
        play(&mut history, "f3", "g1");
        play(&mut history, "f6", "g8");
        let start = Board::new().position_key();
        assert_eq!(history.occurrences(&start), 2);
        history.go_to(Some(1)).unwrap();
        assert_eq!(history.occurrences(&start), 1);
    }
}
