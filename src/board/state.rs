#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Bitboard, CastlingRights, Color, Piece, PieceKind, Square};

/// A complete chess position.
///
/// `Board` is a small `Copy` value. Every transition returns a new board, so
/// a board seen by a caller never changes underneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Piece::new(Color::White, *kind));
            board.set_piece(Square(7, file), Piece::new(Color::Black, *kind));
            board.set_piece(Square(1, file), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(6, file), Piece::new(Color::Black, PieceKind::Pawn));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces and no rights, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant, set only right after a double push
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Piece standing on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].contains(sq))
            .map(|kind| Piece::new(color, kind))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Squares holding pieces of `kind` and `color`
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// Square of `color`'s king, or `None` on a board without one
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).first()
    }

    /// Every occupied square with its piece, a1 first
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.all_occupied
            .iter()
            .filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        let (c, k) = (piece.color.index(), piece.kind.index());
        self.pieces[c][k].insert(sq);
        self.occupied[c].insert(sq);
        self.all_occupied.insert(sq);
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        if let Some(piece) = self.piece_at(sq) {
            let (c, k) = (piece.color.index(), piece.kind.index());
            self.pieces[c][k].remove(sq);
            self.occupied[c].remove(sq);
            self.all_occupied.remove(sq);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_layout() {
        let board = Board::new();
        assert_eq!(board.occupied().popcount(), 32);
        assert_eq!(
            board.piece_at(Square(0, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square(7, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.piece_at(Square(4, 4)), None);
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_set_and_clear_keep_masks_in_sync() {
        let mut board = Board::empty();
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        board.set_piece(Square(3, 3), knight);
        assert!(board.occupied_by(Color::Black).contains(Square(3, 3)));
        board.clear_square(Square(3, 3));
        assert!(board.occupied().is_empty());
        assert!(board.pieces_of(Color::Black, PieceKind::Knight).is_empty());
    }
}
