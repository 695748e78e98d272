//! Static evaluation: material plus piece-square tables.
//!
//! Scores are in centipawns from White's point of view.

use super::{Board, Color, PieceKind, Square};

// Tables are written as seen from White with rank 8 on the first row, so a
// White piece on `sq` reads entry `(7 - rank) * 8 + file` and a Black piece
// reads the vertically mirrored entry `rank * 8 + file`.

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

const fn table(kind: PieceKind) -> &'static [i32; 64] {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Piece-square bonus for a `color` `kind` on `sq`
#[inline]
#[must_use]
pub fn square_bonus(kind: PieceKind, color: Color, sq: Square) -> i32 {
    let idx = match color {
        Color::White => (7 - sq.rank()) * 8 + sq.file(),
        Color::Black => sq.rank() * 8 + sq.file(),
    };
    table(kind)[idx]
}

/// Material and placement balance, positive when White is better.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for color in Color::BOTH {
        for kind in PieceKind::ALL {
            for sq in board.pieces_of(color, kind).iter() {
                score += color.sign() * (kind.value() + square_bonus(kind, color, sq));
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_mirrored_positions_negate() {
        let white_up = Board::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
        let black_up = Board::from_fen("4k3/8/8/3n4/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&white_up), -evaluate(&black_up));
        assert!(evaluate(&white_up) > 0);
    }

    #[test]
    fn test_table_orientation() {
        // a pawn one step from promotion is worth the advanced-rank bonus
        assert_eq!(square_bonus(PieceKind::Pawn, Color::White, Square(6, 0)), 50);
        assert_eq!(square_bonus(PieceKind::Pawn, Color::Black, Square(1, 0)), 50);
        // castled king squares
        assert_eq!(square_bonus(PieceKind::King, Color::White, Square(0, 6)), 30);
        assert_eq!(square_bonus(PieceKind::King, Color::Black, Square(7, 6)), 30);
    }
}
