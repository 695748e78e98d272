use super::super::{Board, Color, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            if forward.0 == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(self.create_move(from, forward, Some(promo), false, false));
                }
            } else {
                moves.push(self.create_move(from, forward, None, false, false));
                if from.0 == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(self.create_move(from, double, None, false, false));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some(victim) if victim.color != color => {
                    if target.0 == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(self.create_move(from, target, Some(promo), false, false));
                        }
                    } else {
                        moves.push(self.create_move(from, target, None, false, false));
                    }
                }
                Some(_) => {}
                // the target belongs to whoever is to move
                None if color == self.side_to_move && Some(target) == self.en_passant_target => {
                    moves.push(self.create_move(from, target, None, false, true));
                }
                None => {}
            }
        }
    }
}
