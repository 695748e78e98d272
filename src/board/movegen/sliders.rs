use super::super::attack_tables::slider_attacks;
use super::super::{Bitboard, Board, Color, MoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        let own_occ = self.occupied_by(color).0;
        let occ = self.all_occupied.0;
        let from_idx = from.index();

        let targets = match slider {
            SliderType::Bishop => slider_attacks(from_idx, occ, true),
            SliderType::Rook => slider_attacks(from_idx, occ, false),
            SliderType::Queen => {
                slider_attacks(from_idx, occ, false) | slider_attacks(from_idx, occ, true)
            }
        } & !own_occ;

        for to_sq in Bitboard(targets).iter() {
            moves.push(self.create_move(from, to_sq, None, false, false));
        }
    }
}
