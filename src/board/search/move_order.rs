use std::cmp::Reverse;

use crate::board::{Move, MoveList};

/// Ordering key: value of the captured piece, 0 for quiet moves
#[inline]
pub(crate) fn capture_value(mv: &Move) -> i32 {
    mv.captured.map_or(0, |p| p.kind.value())
}

/// Sort so the most valuable captures come first.
///
/// The sort is stable, so generation order breaks ties.
pub(crate) fn order_moves(moves: &mut MoveList) {
    moves
        .as_mut_slice()
        .sort_by_key(|mv| Reverse(capture_value(mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, PieceKind, Square};

    #[test]
    fn test_biggest_capture_first() {
        // white queen d4 can take a pawn on d5 or a rook on a4; a2 pawn pushes
        let board = Board::from_fen("4k3/8/8/3p4/r2Q4/8/P7/4K3 w - - 0 1");
        let mut moves = board.legal_moves();
        order_moves(&mut moves);
        let first = moves.first().unwrap();
        assert_eq!(first.to, Square(3, 0));
        assert_eq!(first.captured.map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(moves[1].captured.map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(moves.iter().skip(2).all(|m| capture_value(m) == 0));
    }
}
