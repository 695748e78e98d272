//! A game session: configuration, history, selection and promotion state.
//!
//! `Game` holds everything a board view needs as one plain value, so it can
//! be cloned, compared and (with the `serde` feature) serialized.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::notation::notate_move;
use crate::board::search::{self, Difficulty, SearchLimits, SearchResult};
use crate::board::{Board, Color, GameStatus, Move, MoveError, PieceKind, Square};
use crate::engine::{BackgroundSearch, EngineError};
use crate::history::{self, HistoryEntry, HistoryError, MoveHistory};

/// Who plays which side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsComputer { computer: Color },
}

/// Session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Upper bound on one computer search; `None` searches to full depth
    pub search_timeout: Option<Duration>,
    /// Allow a human move while viewing an earlier position, discarding the
    /// later moves. When false such moves are rejected.
    pub allow_branching: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Easy,
            search_timeout: None,
            allow_branching: false,
        }
    }
}

impl GameConfig {
    /// Human against the computer, which plays `computer`
    #[must_use]
    pub fn against_computer(computer: Color) -> Self {
        GameConfig {
            mode: GameMode::HumanVsComputer { computer },
            ..GameConfig::default()
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_branching(mut self, allow: bool) -> Self {
        self.allow_branching = allow;
        self
    }

    /// Color played by the computer, if any
    #[must_use]
    pub fn computer_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer } => Some(computer),
        }
    }
}

/// A pawn move onto the last rank waiting for the piece choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    config: GameConfig,
    history: MoveHistory,
    selected: Option<Square>,
    pending_promotion: Option<PendingPromotion>,
}

impl Game {
    /// New game from the standard starting position
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Game::from_board(config, Board::new())
    }

    /// New game from an arbitrary position
    #[must_use]
    pub fn from_board(config: GameConfig, board: Board) -> Self {
        Game {
            config,
            history: MoveHistory::new(board),
            selected: None,
            pending_promotion: None,
        }
    }

    /// Back to the position the game started from, keeping the configuration
    pub fn reset(&mut self) {
        self.history = MoveHistory::new(*self.history.initial());
        self.selected = None;
        self.pending_promotion = None;
        log::info!("game reset");
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Position currently shown
    #[must_use]
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Status of the position currently shown, repetition included
    #[must_use]
    pub fn status(&self) -> GameStatus {
        history::status(self.board(), &self.history)
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[must_use]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    fn ensure_playable(&self) -> Result<(), MoveError> {
        if let Some(pending) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square: pending.to });
        }
        let status = self.status();
        if status.is_terminal() {
            return Err(MoveError::GameOver { status });
        }
        if !self.history.is_at_tail() && !self.config.allow_branching {
            return Err(MoveError::NotAtLatestMove);
        }
        Ok(())
    }

    fn ensure_human_turn(&self) -> Result<(), MoveError> {
        if self.config.computer_color() == Some(self.board().side_to_move()) {
            return Err(MoveError::ComputerToMove);
        }
        Ok(())
    }

    /// Select the piece on `square` and return its legal destinations.
    ///
    /// On error the previous selection is kept.
    pub fn select(&mut self, square: Square) -> Result<Vec<Square>, MoveError> {
        self.ensure_playable()?;
        self.ensure_human_turn()?;
        let board = self.board();
        match board.piece_at(square) {
            Some(piece) if piece.color == board.side_to_move() => {
                let targets = board.legal_targets(square);
                self.selected = Some(square);
                Ok(targets)
            }
            _ => Err(MoveError::InvalidSelection { square }),
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Play a human move.
    ///
    /// A pawn move onto the last rank without `promotion` is recorded as
    /// pending and reported as [`MoveError::PromotionRequired`]; finish it
    /// with [`Game::complete_promotion`].
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GameStatus, MoveError> {
        self.ensure_playable()?;
        self.ensure_human_turn()?;
        let board = *self.board();
        match board.find_move(from, to, promotion) {
            Ok(mv) => Ok(self.commit(&board, mv)),
            Err(MoveError::PromotionRequired { from, to }) => {
                self.pending_promotion = Some(PendingPromotion {
                    from,
                    to,
                    color: board.side_to_move(),
                });
                Err(MoveError::PromotionRequired { from, to })
            }
            Err(err) => Err(err),
        }
    }

    /// Finish the pending promotion with `kind`.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<GameStatus, MoveError> {
        let pending = self
            .pending_promotion
            .ok_or(MoveError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotion { kind });
        }
        let board = *self.board();
        let mv = board.find_move(pending.from, pending.to, Some(kind))?;
        Ok(self.commit(&board, mv))
    }

    /// Abandon the pending promotion
    pub fn cancel_promotion(&mut self) {
        self.pending_promotion = None;
    }

    /// Whether the computer should move now.
    ///
    /// Only at the latest position of an unfinished game, on its own turn.
    #[must_use]
    pub fn computer_to_move(&self) -> bool {
        self.config.computer_color() == Some(self.board().side_to_move())
            && self.history.is_at_tail()
            && self.pending_promotion.is_none()
            && !self.status().is_terminal()
    }

    /// Search limits for the computer's next move
    #[must_use]
    pub fn computer_limits(&self) -> SearchLimits {
        let limits = SearchLimits::from(self.config.difficulty);
        match self.config.search_timeout {
            Some(timeout) => limits.with_timeout(timeout),
            None => limits,
        }
    }

    /// Search and play the computer's move on the calling thread.
    pub fn play_computer_move(&mut self) -> Result<GameStatus, MoveError> {
        if !self.computer_to_move() {
            return Err(MoveError::NotComputerTurn);
        }
        let board = *self.board();
        let result = search::search(&board, board.side_to_move(), &self.computer_limits());
        self.apply_computer_move(&result)
    }

    /// Start the computer's search on a worker thread.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn. Feed the
    /// finished result to [`Game::apply_computer_move`].
    pub fn spawn_computer_search(&self) -> Result<Option<BackgroundSearch>, EngineError> {
        if !self.computer_to_move() {
            return Ok(None);
        }
        let board = *self.board();
        BackgroundSearch::spawn(
            board,
            board.side_to_move(),
            self.config.difficulty,
            self.config.search_timeout,
        )
        .map(Some)
    }

    /// Play the move from a finished computer search.
    ///
    /// The move is re-checked against the current position, so a result
    /// that went stale (the game was reset or navigated) is rejected.
    pub fn apply_computer_move(&mut self, result: &SearchResult) -> Result<GameStatus, MoveError> {
        if !self.computer_to_move() {
            return Err(MoveError::NotComputerTurn);
        }
        let board = *self.board();
        let Some(mv) = result.best_move else {
            return Err(MoveError::GameOver {
                status: self.status(),
            });
        };
        board.try_apply(&mv)?;
        log::info!("computer plays {mv} (score {})", result.score);
        Ok(self.commit(&board, mv))
    }

    /// Show the position after move `index` (`None` for the start).
    pub fn go_to(&mut self, index: Option<usize>) -> Result<(), HistoryError> {
        self.history.go_to(index)?;
        self.selected = None;
        self.pending_promotion = None;
        Ok(())
    }

    pub fn go_back(&mut self) -> bool {
        self.clear_transient();
        self.history.back()
    }

    pub fn go_forward(&mut self) -> bool {
        self.clear_transient();
        self.history.forward()
    }

    pub fn go_to_start(&mut self) {
        self.clear_transient();
        self.history.to_start();
    }

    pub fn go_to_end(&mut self) {
        self.clear_transient();
        self.history.to_end();
    }

    fn clear_transient(&mut self) {
        self.selected = None;
        self.pending_promotion = None;
    }

    fn commit(&mut self, board: &Board, mv: Move) -> GameStatus {
        let board_after = board.apply(&mv);
        let status = history::status(&board_after, &self.history);
        let notation = notate_move(&mv, board_after.status());
        self.history.append(HistoryEntry {
            mv,
            board_after,
            notation,
        });
        self.clear_transient();

        match status {
            GameStatus::Playing => {}
            GameStatus::Check => log::info!("{} is in check", board_after.side_to_move()),
            GameStatus::Checkmate => log::info!(
                "checkmate, {} wins",
                board_after.side_to_move().opponent()
            ),
            GameStatus::Stalemate => log::info!("stalemate"),
            GameStatus::DrawByRepetition => log::info!("draw by threefold repetition"),
        }
        status
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}
