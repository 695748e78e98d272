pub mod board;
pub mod engine;
pub mod game;
pub mod history;
pub mod sync;
pub mod timer;
mod zobrist;

pub use board::search::{Difficulty, SearchLimits, SearchResult};
pub use board::{Board, Color, GameStatus, Move, MoveError, Piece, PieceKind, Square};
pub use game::{Game, GameConfig, GameMode};
pub use history::MoveHistory;
