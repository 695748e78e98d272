//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    King,
    Queen,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::King, CastlingSide::Queen];

    /// File of the rook that takes part in this castle
    #[inline]
    #[must_use]
    pub(crate) const fn rook_file(self) -> usize {
        match self {
            CastlingSide::King => 7,
            CastlingSide::Queen => 0,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub(crate) const fn king_target_file(self) -> usize {
        match self {
            CastlingSide::King => 6,
            CastlingSide::Queen => 2,
        }
    }

    /// File the rook lands on
    #[inline]
    #[must_use]
    pub(crate) const fn rook_target_file(self) -> usize {
        match self {
            CastlingSide::King => 5,
            CastlingSide::Queen => 3,
        }
    }

    /// Side implied by a king landing file, if it is a castling file
    #[must_use]
    pub(crate) const fn from_king_target_file(file: usize) -> Option<Self> {
        match file {
            6 => Some(CastlingSide::King),
            2 => Some(CastlingSide::Queen),
            _ => None,
        }
    }
}

/// Castling rights represented as a bitmask.
///
/// Rights are only ever removed once a game is under way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastlingSide::King);
        self.remove(color, CastlingSide::Queen);
    }

    /// True if every right in `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::King) => CASTLE_WHITE_K,
            (Color::White, CastlingSide::Queen) => CASTLE_WHITE_Q,
            (Color::Black, CastlingSide::King) => CASTLE_BLACK_K,
            (Color::Black, CastlingSide::Queen) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut rights = CastlingRights::none();
        rights.set(Color::White, CastlingSide::Queen);
        assert!(rights.has(Color::White, CastlingSide::Queen));
        assert!(!rights.has(Color::White, CastlingSide::King));
        rights.remove(Color::White, CastlingSide::Queen);
        assert_eq!(rights, CastlingRights::none());
    }

    #[test]
    fn test_subset() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::Black);
        assert!(rights.is_subset_of(CastlingRights::all()));
        assert!(!CastlingRights::all().is_subset_of(rights));
    }
}
