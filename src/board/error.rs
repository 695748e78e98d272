//! Error types for board operations.

use thiserror::Error;

use super::status::GameStatus;
use super::types::{PieceKind, Square};

/// Error type for FEN parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have at least 4 parts, found {found}")]
    TooFewParts { found: usize },
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    #[error("FEN placement must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    #[error("Rank {rank} describes {files} files, expected 8")]
    WrongFileCount { rank: usize, files: usize },
    #[error("Invalid move counter '{found}'")]
    InvalidCounter { found: String },
    #[error("{color} has {count} kings")]
    TooManyKings { color: super::types::Color, count: u32 },
}

/// Error type for square parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("Rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    #[error("File {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Rejections when a caller tries to select or play a move.
///
/// None of these leave any state changed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("No piece of the side to move on {square}")]
    InvalidSelection { square: Square },
    #[error("Illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
    #[error("Move {from}{to} promotes and needs a piece choice")]
    PromotionRequired { from: Square, to: Square },
    #[error("Cannot promote to a {kind}")]
    InvalidPromotion { kind: PieceKind },
    #[error("No promotion is pending")]
    NoPendingPromotion,
    #[error("A promotion is pending on {square}")]
    PromotionPending { square: Square },
    #[error("Moves can only be played from the latest position")]
    NotAtLatestMove,
    #[error("Game is over ({status:?})")]
    GameOver { status: GameStatus },
    #[error("It is not the computer's turn")]
    NotComputerTurn,
    #[error("It is the computer's turn")]
    ComputerToMove,
}
