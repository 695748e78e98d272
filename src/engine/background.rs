//! Run the computer opponent's search off the caller's thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use super::EngineError;
use crate::board::search::{self, BestMoveSlot, Difficulty, SearchLimits, SearchResult};
use crate::board::{Board, Color, Move};
use crate::sync::StopFlag;
use crate::timer::DeadlineTimer;

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A search running on a worker thread.
///
/// The worker owns its own copy of the board. Only the stop flag and the
/// best-move slot are shared. Dropping the job without waiting stops the
/// worker, which then exits on its own.
pub struct BackgroundSearch {
    stop: StopFlag,
    best_so_far: BestMoveSlot,
    /// `None` once joined
    handle: Option<JoinHandle<SearchResult>>,
    timer: Option<DeadlineTimer>,
}

impl BackgroundSearch {
    /// Start searching `board` for `color` at `difficulty`.
    ///
    /// With a `timeout`, the search is stopped once it elapses and reports
    /// the best move found by then.
    pub fn spawn(
        board: Board,
        color: Color,
        difficulty: Difficulty,
        timeout: Option<Duration>,
    ) -> Result<Self, EngineError> {
        let stop = StopFlag::new();
        let best_so_far: BestMoveSlot = Arc::new(Mutex::new(None));
        let limits = SearchLimits::from(difficulty)
            .with_stop(stop.clone())
            .with_best_so_far(Arc::clone(&best_so_far));

        let handle = thread::Builder::new()
            .name("chessroom-search".into())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || search::search(&board, color, &limits))
            .map_err(EngineError::Spawn)?;

        let timer = timeout.and_then(|t| DeadlineTimer::start(t, stop.clone()));
        log::debug!("background search started for {color} at {difficulty}");

        Ok(BackgroundSearch {
            stop,
            best_so_far,
            handle: Some(handle),
            timer,
        })
    }

    /// Best root move found so far, if any
    #[must_use]
    pub fn best_so_far(&self) -> Option<Move> {
        *self.best_so_far.lock()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.stop();
    }

    /// Stop the search and wait for its result
    pub fn cancel(self) -> Result<SearchResult, EngineError> {
        self.stop.stop();
        self.wait()
    }

    /// Wait for the search to finish on its own (or hit its timeout)
    pub fn wait(mut self) -> Result<SearchResult, EngineError> {
        let result = match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| EngineError::WorkerPanicked),
            None => Err(EngineError::WorkerPanicked),
        };
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        result
    }
}

impl Drop for BackgroundSearch {
    fn drop(&mut self) {
        if self.handle.is_some() {
            log::debug!("background search dropped before completion, stopping");
            self.stop.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_finds_mate_in_one() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let job = BackgroundSearch::spawn(board, Color::White, Difficulty::Easy, None).unwrap();
        let result = job.wait().unwrap();
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("a1a8"));
        assert!(!result.stopped);
    }

    #[test]
    fn test_cancel_still_returns_a_move() {
        let board = Board::new();
        let job = BackgroundSearch::spawn(board, Color::White, Difficulty::Hard, None).unwrap();
        let result = job.cancel().unwrap();
        let mv = result.best_move.expect("a legal move exists");
        assert!(board.legal_moves().contains(&mv));
    }

    #[test]
    fn test_timeout_stops_search() {
        let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let job = BackgroundSearch::spawn(
            board,
            Color::White,
            Difficulty::Hard,
            Some(Duration::from_millis(1)),
        )
        .unwrap();
        let result = job.wait().unwrap();
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_drop_stops_worker() {
        let job = BackgroundSearch::spawn(Board::new(), Color::White, Difficulty::Hard, None).unwrap();
        let stop = job.stop.clone();
        drop(job);
        assert!(stop.is_stopped());
    }

    #[test]
    fn test_wait_does_not_signal_stop() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let job = BackgroundSearch::spawn(board, Color::White, Difficulty::Easy, None).unwrap();
        let stop = job.stop.clone();
        let result = job.wait().unwrap();
        assert!(!result.stopped);
        assert!(!stop.is_stopped());
    }
}
