//! Pure move application.

use super::{Board, CastlingSide, Color, Move, Piece, PieceKind, Square};

/// Castling right tied to a rook's home corner
fn corner_right(sq: Square) -> Option<(Color, CastlingSide)> {
    match (sq.0, sq.1) {
        (0, 0) => Some((Color::White, CastlingSide::Queen)),
        (0, 7) => Some((Color::White, CastlingSide::King)),
        (7, 0) => Some((Color::Black, CastlingSide::Queen)),
        (7, 7) => Some((Color::Black, CastlingSide::King)),
        _ => None,
    }
}

impl Board {
    /// Return the board after `mv`, leaving `self` untouched.
    ///
    /// `mv` must have been generated for this board; legality is not checked
    /// here (see [`Board::try_apply`]).
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = *self;
        let color = mv.piece.color;

        if let Some(captured_on) = mv.capture_square() {
            next.clear_square(captured_on);
        }
        next.clear_square(mv.from);
        next.set_piece(mv.to, Piece::new(color, mv.landing_kind()));

        if let Some(side) = mv.castling_side() {
            let rank = mv.from.0;
            let rook_from = Square(rank, side.rook_file());
            next.clear_square(rook_from);
            next.set_piece(
                Square(rank, side.rook_target_file()),
                Piece::new(color, PieceKind::Rook),
            );
        }

        // Rights only ever shrink: a king move drops both, and any move from
        // or onto a rook corner drops that corner's right.
        if mv.piece.kind == PieceKind::King {
            next.castling_rights.remove_color(color);
        }
        for sq in [mv.from, mv.to] {
            if let Some((owner, side)) = corner_right(sq) {
                next.castling_rights.remove(owner, side);
            }
        }

        next.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square((mv.from.0 + mv.to.0) / 2, mv.from.1))
        } else {
            None
        };

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.opponent();

        next
    }
}
