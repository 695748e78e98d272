//! Chess rules: position representation, move generation, legality,
//! game status, notation and the computer opponent's search.

mod apply;
mod attack_tables;
mod attacks;
pub mod error;
pub mod eval;
mod fen;
mod movegen;
pub mod notation;
mod position_key;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use fen::START_FEN;
pub use position_key::PositionKey;
pub use state::Board;
pub use status::GameStatus;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, CastlingSide, Color, Move, MoveList, MoveListIntoIter,
    Piece, PieceKind, Square,
};

pub(crate) use types::PROMOTION_PIECES;
