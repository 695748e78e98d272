//! Identity of a position for repetition counting.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attack_tables::PAWN_ATTACKS;
use super::{Bitboard, Board, CastlingRights, Color, PieceKind, Square};
use crate::zobrist::ZOBRIST;

/// Placement, side to move, castling rights and en-passant target.
///
/// Two positions are the same for repetition purposes exactly when their
/// keys are equal. Move counters are not part of the key, and the
/// en-passant target only counts when the side to move can legally take.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionKey {
    placement: [[u64; 6]; 2],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    hash: u64,
}

impl PositionKey {
    /// Zobrist hash of the key
    #[inline]
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

impl PartialEq for PositionKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.placement == other.placement
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
    }
}

impl Eq for PositionKey {}

impl Hash for PositionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Board {
    /// Repetition key for this position.
    #[must_use]
    pub fn position_key(&self) -> PositionKey {
        let mut placement = [[0u64; 6]; 2];
        let mut hash = 0u64;
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let bb: Bitboard = self.pieces_of(color, kind);
                placement[color.index()][kind.index()] = bb.0;
                for sq in bb.iter() {
                    hash ^= ZOBRIST.piece_keys[color.index()][kind.index()][sq.index()];
                }
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }
        hash ^= ZOBRIST.castling_keys[usize::from(self.castling_rights.as_u8())];
        let en_passant_target = self.capturable_en_passant();
        if let Some(ep) = en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[ep.1];
        }

        PositionKey {
            placement,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target,
            hash,
        }
    }

    /// The en-passant target, if some pawn of the side to move can legally
    /// capture onto it.
    fn capturable_en_passant(&self) -> Option<Square> {
        let target = self.en_passant_target?;
        let us = self.side_to_move;
        // our pawns that attack the target are those a pawn of theirs on the
        // target would attack
        let attackers = Bitboard(
            self.pieces_of(us, PieceKind::Pawn).0 & PAWN_ATTACKS[us.opponent().index()][target.index()],
        );
        attackers
            .iter()
            .any(|from| {
                self.legal_moves_from(from)
                    .iter()
                    .any(|mv| mv.is_en_passant)
            })
            .then_some(target)
    }
}
