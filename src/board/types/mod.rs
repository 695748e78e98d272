//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors, colored pieces
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastlingSide` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastlingRights, CastlingSide};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
