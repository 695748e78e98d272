//! Zobrist keys for position hashing.
//!
//! Used only to bucket [`PositionKey`](crate::board::PositionKey) values;
//! key equality always compares the full position.

use once_cell::sync::Lazy;
use rand::prelude::*;

pub(crate) struct ZobristKeys {
    // piece_keys[color][kind][square]
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    pub(crate) black_to_move_key: u64,
    // one key per castling-rights mask
    pub(crate) castling_keys: [u64; 16],
    // en_passant_keys[file] (only the file matters for the target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        // the empty mask hashes to zero
        for key in castling_keys.iter_mut().skip(1) {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
