//! Precomputed leaper attack masks and slider ray casting.

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, mask) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                *mask |= 1u64 << (nr as usize * 8 + nf as usize);
            }
        }
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Diagonal pawn attacks, indexed `[color][square]` (White=0 attacks north)
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

/// Empty-board rays, indexed `[square][direction]` over rook then bishop directions
static RAYS: Lazy<[[u64; 8]; 64]> = Lazy::new(|| {
    let mut rays = [[0u64; 8]; 64];
    let dirs = ROOK_DIRECTIONS.iter().chain(BISHOP_DIRECTIONS.iter());
    for (d, &(dr, df)) in dirs.enumerate() {
        for (sq, sq_rays) in rays.iter_mut().enumerate() {
            let mut r = (sq / 8) as isize + dr;
            let mut f = (sq % 8) as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                sq_rays[d] |= 1u64 << (r as usize * 8 + f as usize);
                r += dr;
                f += df;
            }
        }
    }
    rays
});

/// Whether a ray direction moves toward higher square indices
const fn ray_is_positive(dir: usize) -> bool {
    // rook: N, S, E, W; bishop: NE, NW, SE, SW
    matches!(dir, 0 | 2 | 4 | 5)
}

/// Attacks of a rook (`bishop == false`) or bishop from `from_idx`.
///
/// Each ray stops at the first occupied square, which is included.
pub(crate) fn slider_attacks(from_idx: usize, occ: u64, bishop: bool) -> u64 {
    let base = if bishop { 4 } else { 0 };
    let mut attacks = 0u64;
    for dir in base..base + 4 {
        let ray = RAYS[from_idx][dir];
        let blockers = ray & occ;
        if blockers == 0 {
            attacks |= ray;
            continue;
        }
        let blocker = if ray_is_positive(dir) {
            blockers.trailing_zeros() as usize
        } else {
            63 - blockers.leading_zeros() as usize
        };
        attacks |= ray & !RAYS[blocker][dir];
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn bit(name: &str) -> u64 {
        let sq: Square = name.parse().unwrap();
        1u64 << sq.index()
    }

    #[test]
    fn test_knight_corner() {
        assert_eq!(KNIGHT_ATTACKS[0], bit("b3") | bit("c2"));
    }

    #[test]
    fn test_king_center_has_eight() {
        assert_eq!(KING_ATTACKS[Square(3, 3).index()].count_ones(), 8);
    }

    #[test]
    fn test_pawn_attacks_by_color() {
        let e4 = Square(3, 4).index();
        assert_eq!(PAWN_ATTACKS[0][e4], bit("d5") | bit("f5"));
        assert_eq!(PAWN_ATTACKS[1][e4], bit("d3") | bit("f3"));
        assert_eq!(PAWN_ATTACKS[0][Square(3, 0).index()], bit("b5"));
    }

    #[test]
    fn test_rook_stops_at_blocker() {
        let a1 = Square(0, 0).index();
        let occ = bit("a4") | bit("c1");
        let attacks = slider_attacks(a1, occ, false);
        let expected = bit("a2") | bit("a3") | bit("a4") | bit("b1") | bit("c1");
        assert_eq!(attacks, expected);
    }

    #[test]
    fn test_bishop_open_board() {
        let d4 = Square(3, 3).index();
        assert_eq!(slider_attacks(d4, 0, true).count_ones(), 13);
        // blocker on f6 cuts g7 and h8
        let attacks = slider_attacks(d4, bit("f6"), true);
        assert_ne!(attacks & bit("f6"), 0);
        assert_eq!(attacks & (bit("g7") | bit("h8")), 0);
        // blocker on b2 cuts a1
        let attacks = slider_attacks(d4, bit("b2"), true);
        assert_eq!(attacks & bit("a1"), 0);
    }
}
