//! Property-based tests using proptest.

use crate::board::search::{search, SearchLimits};
use crate::board::{Board, Color, Square};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Boards visited by a seeded random playout from the start position,
/// the start included.
fn random_playout(seed: u64, num_moves: usize) -> Vec<Board> {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut visited = vec![board];
    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        board = board.apply(&moves[idx]);
        visited.push(board);
    }
    visited
}

proptest! {
    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_playout(seed, num_moves) {
            let mover = board.side_to_move();
            let snapshot = board;
            for mv in board.legal_moves().iter() {
                let after = board.apply(mv);
                prop_assert!(!after.is_in_check(mover), "{} leaves king in check in {}", mv, board.to_fen());
            }
            // apply is pure
            prop_assert_eq!(board, snapshot);
        }
    }

    /// Property: the attacked set and the per-square query agree
    #[test]
    fn prop_attack_views_agree(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_playout(seed, num_moves) {
            for by in Color::BOTH {
                let attacked = board.attacked_squares(by);
                for idx in 0..64 {
                    let sq = Square::from_index(idx);
                    prop_assert_eq!(attacked.contains(sq), board.is_square_attacked(sq, by));
                }
            }
        }
    }

    /// Property: castling rights never grow
    #[test]
    fn prop_castling_rights_only_shrink(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let boards = random_playout(seed, num_moves);
        for pair in boards.windows(2) {
            prop_assert!(pair[1].castling_rights().is_subset_of(pair[0].castling_rights()));
        }
    }

    /// Property: the side to move alternates and the counters follow the rules
    #[test]
    fn prop_turn_and_counters(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let boards = random_playout(seed, num_moves);
        for pair in boards.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert_eq!(after.side_to_move(), before.side_to_move().opponent());
            let expected_fullmove = match before.side_to_move() {
                Color::White => before.fullmove_number(),
                Color::Black => before.fullmove_number() + 1,
            };
            prop_assert_eq!(after.fullmove_number(), expected_fullmove);
            prop_assert!(after.halfmove_clock() == 0 || after.halfmove_clock() == before.halfmove_clock() + 1);
        }
    }

    /// Property: a board rebuilt from its FEN has the same repetition key
    #[test]
    fn prop_fen_preserves_position_key(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_playout(seed, num_moves) {
            let rebuilt = Board::from_fen(&board.to_fen());
            prop_assert_eq!(rebuilt.position_key(), board.position_key());
            prop_assert_eq!(rebuilt, board);
        }
    }

    /// Property: every legal destination is reported through legal_targets
    #[test]
    fn prop_targets_match_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let boards = random_playout(seed, num_moves);
        let board = boards[boards.len() - 1];
        let total: usize = board
            .occupied_by(board.side_to_move())
            .iter()
            .map(|from| board.legal_moves_from(from).len())
            .sum();
        prop_assert_eq!(total, board.legal_moves().len());
        for mv in board.legal_moves().iter() {
            prop_assert!(board.legal_targets(mv.from).contains(&mv.to));
        }
    }

    /// Property: a shallow search answers exactly when a legal move exists,
    /// and the answer is one of them
    #[test]
    fn prop_depth_one_search_answers_iff_moves_exist(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let limits = SearchLimits::depth(1);
        for board in random_playout(seed, num_moves) {
            let legal = board.legal_moves();
            let result = search(&board, board.side_to_move(), &limits);
            prop_assert_eq!(result.best_move.is_none(), legal.is_empty(), "{}", board.to_fen());
            if let Some(mv) = result.best_move {
                prop_assert!(legal.iter().any(|m| *m == mv), "{} not legal in {}", mv, board.to_fen());
            }
        }
    }
}
