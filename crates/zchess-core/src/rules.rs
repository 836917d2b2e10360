//! Move legality per piece type.
//!
//! Legality here is purely geometric plus occupancy: no side to move, no
//! cooldown, no king safety. A king may step onto an attacked square.

use crate::board::Board;
use crate::piece::{Color, PieceType};
use crate::square::Square;

/// Can a `kind` piece of `color` standing on `from` move to `to` on `board`?
pub fn is_move_legal(kind: PieceType, color: Color, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }

    let target = board.get(to);
    if target.is_some_and(|p| p.color == color) {
        return false;
    }

    let dr = to.rank() as i8 - from.rank() as i8;
    let df = to.file() as i8 - from.file() as i8;
    let (abs_dr, abs_df) = (dr.abs(), df.abs());

    match kind {
        PieceType::Pawn => {
            let direction = color.pawn_direction();
            if df == 0 && target.is_none() {
                if dr == direction {
                    return true;
                }
                if dr == 2 * direction && from.rank() == color.pawn_start_rank() {
                    return from
                        .offset(direction, 0)
                        .is_some_and(|mid| !board.is_occupied(mid));
                }
                return false;
            }
            // Diagonal only as a capture; no en passant.
            abs_df == 1 && dr == direction && target.is_some()
        }
        PieceType::Knight => (abs_dr == 2 && abs_df == 1) || (abs_dr == 1 && abs_df == 2),
        PieceType::Bishop => abs_dr == abs_df && is_path_clear(from, to, board),
        PieceType::Rook => (dr == 0 || df == 0) && is_path_clear(from, to, board),
        PieceType::Queen => {
            (dr == 0 || df == 0 || abs_dr == abs_df) && is_path_clear(from, to, board)
        }
        PieceType::King => abs_dr <= 1 && abs_df <= 1,
    }
}

/// Every square strictly between `from` and `to` is empty.
/// Only meaningful for straight or diagonal lines.
fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let step_rank = (to.rank() as i8 - from.rank() as i8).signum();
    let step_file = (to.file() as i8 - from.file() as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(step_rank, step_file) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if board.is_occupied(current) {
            return false;
        }
    }
}

/// Destinations the piece on `from` may legally move to, rank-major.
/// Empty if `from` holds no piece.
pub fn legal_destinations(from: Square, board: &Board) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    Square::all()
        .filter(|&to| is_move_legal(piece.kind, piece.color, from, to, board))
        .collect()
}
