//! Insufficient-material draw rule.

use crate::board::Board;
use crate::piece::PieceType;

/// Two pieces left, or three where one of them is a knight or bishop.
///
/// Only counts; it does not check that the two others are kings. While a game
/// is still playing both kings are on the board, so the count is enough.
pub fn is_insufficient_material(board: &Board) -> bool {
    match board.piece_count() {
        2 => true,
        3 => board
            .pieces()
            .any(|(_, p)| matches!(p.kind, PieceType::Knight | PieceType::Bishop)),
        _ => false,
    }
}
