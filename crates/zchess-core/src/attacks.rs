//! Attack and check queries. Display-only: check never blocks a move.

use crate::board::Board;
use crate::piece::{Color, PieceType};
use crate::rules::is_move_legal;
use crate::square::Square;

/// True if any `attacker` piece could legally move onto `square`.
///
/// Reuses ordinary legality, so a pawn attacks only its diagonal capture
/// squares, and only when they hold an enemy piece.
pub fn is_square_attacked(square: Square, attacker: Color, board: &Board) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, p)| is_move_legal(p.kind, p.color, from, square, board))
}

/// First king of `color` in rank-major, file-minor order.
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, p)| p.kind == PieceType::King)
        .map(|(sq, _)| sq)
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match find_king(board, color) {
        Some(king) => is_square_attacked(king, color.opponent(), board),
        None => false,
    }
}
