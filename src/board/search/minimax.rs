//! Depth-limited minimax with alpha-beta pruning.

use std::time::Instant;

use super::constants::{INFINITY, MATE_SCORE, NODE_POLL_INTERVAL};
use super::move_order::order_moves;
use super::{SearchLimits, SearchResult};
use crate::board::eval::evaluate;
use crate::board::{Board, Color};

pub(crate) struct Searcher<'a> {
    limits: &'a SearchLimits,
    nodes: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(limits: &'a SearchLimits) -> Self {
        Searcher {
            limits,
            nodes: 0,
            stopped: false,
        }
    }

    fn should_stop(&self) -> bool {
        self.limits.stop.is_stopped()
            || self
                .limits
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Score of `board` searched `depth` plies deep, White maximizing.
    ///
    /// `ply` is the distance from the root and shortens mate scores, so a
    /// nearer mate is worth more to the winner. Once the search is stopped
    /// the returned value is meaningless and callers discard it.
    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;
        if self.nodes % NODE_POLL_INTERVAL == 0 && self.should_stop() {
            self.stopped = true;
        }
        if self.stopped {
            return 0;
        }

        if depth == 0 {
            return evaluate(board);
        }

        let mut moves = board.legal_moves();
        if moves.is_empty() {
            let side = board.side_to_move();
            if !board.is_in_check(side) {
                return 0;
            }
            let mate = MATE_SCORE - ply as i32;
            return match side {
                Color::White => -mate,
                Color::Black => mate,
            };
        }
        order_moves(&mut moves);

        if board.side_to_move() == Color::White {
            let mut best = -INFINITY;
            for mv in &moves {
                let score = self.minimax(&board.apply(mv), depth - 1, alpha, beta, ply + 1);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha || self.stopped {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let score = self.minimax(&board.apply(mv), depth - 1, alpha, beta, ply + 1);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha || self.stopped {
                    break;
                }
            }
            best
        }
    }

    /// Score every root move and pick the best one for the side to move.
    pub(crate) fn search_root(mut self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let depth = self.limits.depth.max(1);
        let color = board.side_to_move();
        let maximizing = color == Color::White;

        let mut moves = board.legal_moves();
        order_moves(&mut moves);

        let mut best = None;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;

        for mv in &moves {
            if self.should_stop() {
                self.stopped = true;
                break;
            }
            let score = self.minimax(&board.apply(mv), depth - 1, alpha, beta, 1);
            if self.stopped {
                break;
            }
            log::trace!("root {mv} scored {score}");

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((*mv, score));
                self.limits.publish(*mv);
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        // interrupted before any move was fully scored
        if best.is_none() {
            if let Some(first) = moves.first() {
                best = Some((first, evaluate(&board.apply(&first))));
                self.limits.publish(first);
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, score)| score),
            depth,
            nodes: self.nodes,
            stopped: self.stopped,
            elapsed: start.elapsed(),
        }
    }
}
