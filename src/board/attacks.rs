//! Attack oracle: which squares a side attacks.
//!
//! Attacks follow piece movement except that pawns attack only diagonally
//! and squares holding the attacker's own pieces still count (they are
//! defended). Legality, castling and en passant are not consulted.

use super::attack_tables::{slider_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::types::{Bitboard, Color, PieceKind, Square};
use super::Board;

impl Board {
    /// Union of every square attacked by `by`.
    #[must_use]
    pub fn attacked_squares(&self, by: Color) -> Bitboard {
        let occ = self.all_occupied.0;
        let mut attacks = 0u64;

        for sq in self.pieces_of(by, PieceKind::Pawn).iter() {
            attacks |= PAWN_ATTACKS[by.index()][sq.index()];
        }
        for sq in self.pieces_of(by, PieceKind::Knight).iter() {
            attacks |= KNIGHT_ATTACKS[sq.index()];
        }
        for sq in self.pieces_of(by, PieceKind::King).iter() {
            attacks |= KING_ATTACKS[sq.index()];
        }
        let queens = self.pieces_of(by, PieceKind::Queen);
        for sq in (self.pieces_of(by, PieceKind::Rook) | queens).iter() {
            attacks |= slider_attacks(sq.index(), occ, false);
        }
        for sq in (self.pieces_of(by, PieceKind::Bishop) | queens).iter() {
            attacks |= slider_attacks(sq.index(), occ, true);
        }

        Bitboard(attacks)
    }

    /// Whether `square` is attacked by any piece of `by`.
    ///
    /// Looks outward from the target square, so it agrees with
    /// [`Board::attacked_squares`] without building the whole set.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let target = square.index();
        let c = by.index();

        // a pawn of `by` attacks `square` iff a pawn of the other color on
        // `square` would attack the pawn
        let pawn_sources = PAWN_ATTACKS[by.opponent().index()][target];
        if self.pieces[c][PieceKind::Pawn.index()].0 & pawn_sources != 0 {
            return true;
        }
        if self.pieces[c][PieceKind::Knight.index()].0 & KNIGHT_ATTACKS[target] != 0 {
            return true;
        }
        if self.pieces[c][PieceKind::King.index()].0 & KING_ATTACKS[target] != 0 {
            return true;
        }

        let queens = self.pieces[c][PieceKind::Queen.index()].0;
        let rook_like = self.pieces[c][PieceKind::Rook.index()].0 | queens;
        let bishop_like = self.pieces[c][PieceKind::Bishop.index()].0 | queens;
        let occ = self.all_occupied.0;

        slider_attacks(target, occ, false) & rook_like != 0
            || slider_attacks(target, occ, true) & bishop_like != 0
    }

    /// Whether `color`'s king is attacked.
    ///
    /// A board without a king for `color` is malformed; this logs a warning
    /// and reports `false`.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => {
                log::warn!("malformed board: no {color} king, treating as not in check");
                false
            }
        }
    }
}
