//! The 8x8 board. Owns every piece in play.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shakmaty::{File, Rank, Role};

use crate::piece::{Color, Piece, PieceId, PieceType};
use crate::square::Square;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    next_id: u32,
}

/// Standard starting layout, every piece immediately ready.
pub fn new_initial_board() -> Board {
    let mut board = Board::empty();
    for sq in Square::all() {
        let back = PieceType::BACK_RANK[sq.file() as usize];
        match sq.rank() {
            0 => board.place(sq, back, Color::Black),
            1 => board.place(sq, PieceType::Pawn, Color::Black),
            6 => board.place(sq, PieceType::Pawn, Color::White),
            7 => board.place(sq, back, Color::White),
            _ => continue,
        };
    }
    board
}

impl Default for Board {
    fn default() -> Self {
        new_initial_board()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            next_id: 0,
        }
    }

    /// Put a fresh, ready piece on `square`, replacing whatever stood there.
    pub fn place(&mut self, square: Square, kind: PieceType, color: Color) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.squares[square.rank() as usize][square.file() as usize] = Some(Piece {
            id,
            kind,
            color,
            // Unix epoch: ready at any realistic `now`.
            cooldown_until: DateTime::<Utc>::default(),
        });
        id
    }

    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.squares[square.rank() as usize][square.file() as usize].as_ref()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    /// Move a piece value onto `square`, returning the displaced one.
    pub(crate) fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].replace(piece)
    }

    /// Occupied squares in rank-major, file-minor order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Square currently holding the piece with `id`, if it is still on the board.
    pub fn locate(&self, id: PieceId) -> Option<Square> {
        self.pieces().find(|(_, p)| p.id == id).map(|(sq, _)| sq)
    }

    /// Piece placement field of FEN, e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn placement_fen(&self) -> String {
        let mut board = shakmaty::Board::empty();
        for (sq, piece) in self.pieces() {
            // Our rank 0 is the eighth rank.
            let target = shakmaty::Square::from_coords(
                File::new(sq.file() as u32),
                Rank::new(7 - sq.rank() as u32),
            );
            board.set_piece_at(
                target,
                shakmaty::Piece {
                    color: match piece.color {
                        Color::White => shakmaty::Color::White,
                        Color::Black => shakmaty::Color::Black,
                    },
                    role: role_of(piece.kind),
                },
            );
        }
        board.to_string()
    }
}

fn role_of(kind: PieceType) -> Role {
    match kind {
        PieceType::Pawn => Role::Pawn,
        PieceType::Knight => Role::Knight,
        PieceType::Bishop => Role::Bishop,
        PieceType::Rook => Role::Rook,
        PieceType::Queen => Role::Queen,
        PieceType::King => Role::King,
    }
}
