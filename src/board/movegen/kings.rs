use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Board, CastlingSide, Color, MoveList, Piece, PieceKind, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let own_occ = self.occupied_by(color).0;
        let targets = Bitboard(KING_ATTACKS[from.index()] & !own_occ);

        for to_sq in targets.iter() {
            moves.push(self.create_move(from, to_sq, None, false, false));
        }

        for side in CastlingSide::BOTH {
            if self.can_castle(color, side) {
                let to_sq = Square(color.back_rank(), side.king_target_file());
                moves.push(self.create_move(from, to_sq, None, true, false));
            }
        }
    }

    /// Whether `color` may castle toward `side` right now.
    ///
    /// Requires the right, the king and rook on their home squares, an empty
    /// path between them, and a king that is not in check and does not pass
    /// through or land on an attacked square. Transit squares are tested on a
    /// copy of the board where only the king has moved.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let rank = color.back_rank();
        let king_from = Square(rank, 4);
        let rook_from = Square(rank, side.rook_file());
        if self.piece_at(king_from) != Some(Piece::new(color, PieceKind::King))
            || self.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook))
        {
            return false;
        }

        let (lo, hi) = if rook_from.1 < king_from.1 {
            (rook_from.1 + 1, king_from.1)
        } else {
            (king_from.1 + 1, rook_from.1)
        };
        if (lo..hi).any(|file| !self.is_empty(Square(rank, file))) {
            return false;
        }

        let enemy = color.opponent();
        if self.is_square_attacked(king_from, enemy) {
            return false;
        }

        let target_file = side.king_target_file();
        let transit = [Square(rank, (4 + target_file) / 2), Square(rank, target_file)];
        transit.into_iter().all(|sq| {
            let mut scratch = *self;
            scratch.clear_square(king_from);
            scratch.set_piece(sq, Piece::new(color, PieceKind::King));
            !scratch.is_square_attacked(sq, enemy)
        })
    }
}
