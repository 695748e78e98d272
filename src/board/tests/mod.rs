//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `draw.rs` - Repetition detection through the move history
//! - `edge_cases.rs` - Special moves and unusual positions
//! - `search.rs` - Computer opponent
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;

use crate::board::{Board, Move, PieceKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse()
        .unwrap_or_else(|err| panic!("bad square {name}: {err}"))
}

/// Resolve a coordinate move like `e2e4` or `a7a8q` against `board`.
pub(super) fn find_uci(board: &Board, uci: &str) -> Move {
    let promotion = uci.chars().nth(4).and_then(PieceKind::from_char);
    board
        .find_move(sq(&uci[0..2]), sq(&uci[2..4]), promotion)
        .unwrap_or_else(|err| panic!("{uci} not legal: {err}"))
}

pub(super) fn play(board: &Board, uci: &str) -> Board {
    board.apply(&find_uci(board, uci))
}

pub(super) fn play_line(board: &Board, line: &[&str]) -> Board {
    line.iter().fold(*board, |b, uci| play(&b, uci))
}
