//! Short algebraic move text for the move list.
//!
//! Disambiguation is never added: two knights that can both reach f3 both
//! print `Nf3`.

use super::{CastlingSide, GameStatus, Move, Piece, PieceKind, Square};

/// Notation for a basic move.
///
/// Piece letter (none for pawns), then for captures the origin file of a
/// capturing pawn and `x`, then the destination, then `#` for mate or `+`
/// for check.
#[must_use]
pub fn notate(
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    is_check: bool,
    is_checkmate: bool,
) -> String {
    let mut text = String::with_capacity(6);
    if let Some(letter) = piece.kind.notation_letter() {
        text.push(letter);
    }
    if captured.is_some() {
        if piece.kind == PieceKind::Pawn {
            text.push(from.file_char());
        }
        text.push('x');
    }
    text.push_str(&to.to_string());
    push_check_suffix(&mut text, is_check, is_checkmate);
    text
}

/// Notation for a generated move, given the status of the position it leads to.
///
/// Castling prints as `O-O` / `O-O-O` and promotions append `=` and the
/// piece letter; everything else is [`notate`].
#[must_use]
pub fn notate_move(mv: &Move, status_after: GameStatus) -> String {
    let is_checkmate = status_after == GameStatus::Checkmate;
    let is_check = status_after.is_check();

    if let Some(side) = mv.castling_side() {
        let mut text = match side {
            CastlingSide::King => String::from("O-O"),
            CastlingSide::Queen => String::from("O-O-O"),
        };
        push_check_suffix(&mut text, is_check, is_checkmate);
        return text;
    }

    let Some(promo) = mv.promotion.and_then(PieceKind::notation_letter) else {
        return notate(mv.piece, mv.from, mv.to, mv.captured, is_check, is_checkmate);
    };
    let mut text = notate(mv.piece, mv.from, mv.to, mv.captured, false, false);
    text.push('=');
    text.push(promo);
    push_check_suffix(&mut text, is_check, is_checkmate);
    text
}

fn push_check_suffix(text: &mut String, is_check: bool, is_checkmate: bool) {
    if is_checkmate {
        text.push('#');
    } else if is_check {
        text.push('+');
    }
}
