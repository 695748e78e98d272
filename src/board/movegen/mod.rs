//! Move generation and the legality filter.
//!
//! Pseudo-legal generation covers each piece's movement rules for the color
//! of the piece itself. Legal generation keeps the pseudo-legal moves of the
//! side to move that do not leave its own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Move, MoveError, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Pseudo-legal moves of the piece on `from`, ignoring whose turn it is.
    ///
    /// An empty square yields an empty list.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.piece_at(from) {
            self.generate_piece_moves(from, piece, &mut moves);
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, color, moves),
            PieceKind::Knight => self.generate_knight_moves(from, color, moves),
            PieceKind::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, moves),
            PieceKind::Rook => self.generate_slider_moves(from, color, SliderType::Rook, moves),
            PieceKind::Queen => self.generate_slider_moves(from, color, SliderType::Queen, moves),
            PieceKind::King => self.generate_king_moves(from, color, moves),
        }
    }

    fn create_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        is_castling: bool,
        is_en_passant: bool,
    ) -> Move {
        let piece = self
            .piece_at(from)
            .unwrap_or(Piece::new(self.side_to_move, PieceKind::Pawn));
        let captured = if is_en_passant {
            Some(Piece::new(piece.color.opponent(), PieceKind::Pawn))
        } else if is_castling {
            None
        } else {
            self.piece_at(to)
        };

        Move {
            from,
            to,
            piece,
            captured,
            promotion,
            is_castling,
            is_en_passant,
        }
    }

    /// Whether `mv` keeps the mover's king safe once played.
    fn leaves_king_safe(&self, mv: &Move) -> bool {
        let color = mv.piece.color;
        let after = self.apply(mv);
        match after.king_square(color) {
            Some(king) => !after.is_square_attacked(king, color.opponent()),
            None => true,
        }
    }

    /// Legal moves of the piece on `from`.
    ///
    /// Empty unless the square holds a piece of the side to move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        match self.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {
                let mut moves = MoveList::new();
                self.generate_piece_moves(from, piece, &mut moves);
                moves.retain(|mv| self.leaves_king_safe(mv));
                moves
            }
            _ => MoveList::new(),
        }
    }

    /// All legal moves of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.occupied_by(self.side_to_move).iter() {
            moves.extend_from(&self.legal_moves_from(from));
        }
        moves
    }

    /// Whether the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.occupied_by(self.side_to_move)
            .iter()
            .any(|from| !self.legal_moves_from(from).is_empty())
    }

    /// Destination squares of the legal moves from `from`, for highlighting.
    ///
    /// Promotion choices collapse to one square.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self.legal_moves_from(from).iter().map(|m| m.to).collect();
        targets.sort();
        targets.dedup();
        targets
    }

    /// Resolve a (from, to, promotion) selection to a legal move.
    ///
    /// `promotion` is only consulted for pawn moves onto the last rank.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        match self.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {}
            _ => return Err(MoveError::InvalidSelection { square: from }),
        }

        let candidates = self.legal_moves_from(from);
        let mut matching = candidates.iter().filter(|m| m.to == to).peekable();
        let Some(first) = matching.peek().copied() else {
            return Err(MoveError::IllegalMove { from, to });
        };

        if !first.is_promotion() {
            return Ok(*first);
        }
        match promotion {
            None => Err(MoveError::PromotionRequired { from, to }),
            Some(kind) if !kind.is_promotion_target() => Err(MoveError::InvalidPromotion { kind }),
            Some(kind) => matching
                .find(|m| m.promotion == Some(kind))
                .copied()
                .ok_or(MoveError::IllegalMove { from, to }),
        }
    }

    /// Apply `mv` after checking that it is legal here.
    ///
    /// `self` is left untouched whether or not the move is accepted.
    pub fn try_apply(&self, mv: &Move) -> Result<Board, MoveError> {
        if self.legal_moves_from(mv.from).contains(mv) {
            Ok(self.apply(mv))
        } else {
            Err(MoveError::IllegalMove {
                from: mv.from,
                to: mv.to,
            })
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves.iter().map(|m| self.apply(m).perft(depth - 1)).sum()
    }
}
