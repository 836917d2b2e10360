//! Game session state machine.
//!
//! A [`GameSession`] owns one game's board, status and move history. Every
//! mutation goes through [`GameSession::execute_move`], which either applies a
//! move completely or returns an error and leaves the session untouched.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::attacks::is_king_in_check;
use crate::board::{new_initial_board, Board};
use crate::cooldown::CooldownConfig;
use crate::error::MoveError;
use crate::material::is_insufficient_material;
use crate::piece::{Color, Piece, PieceId, PieceType};
use crate::rules::is_move_legal;
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// A king was captured.
    Checkmate { winner: Color },
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_id: PieceId,
    pub piece_type: PieceType,
    pub piece_color: Color,
    pub from: Square,
    pub to: Square,
    pub timestamp: DateTime<Utc>,
}

/// Result of a successfully executed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    history: Vec<MoveRecord>,
    cooldowns: CooldownConfig,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(cooldowns: CooldownConfig, now: DateTime<Utc>) -> Self {
        Self::with_board(new_initial_board(), cooldowns, now)
    }

    /// Start from an arbitrary position, e.g. a test fixture or endgame drill.
    pub fn with_board(board: Board, cooldowns: CooldownConfig, now: DateTime<Utc>) -> Self {
        Self {
            board,
            status: GameStatus::Playing,
            history: Vec::new(),
            cooldowns,
            started_at: now,
        }
    }

    /// Discard the current game and start a fresh one with the same cooldowns.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(self.cooldowns, now);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn cooldowns(&self) -> &CooldownConfig {
        &self.cooldowns
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Game clock since the session started.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now - self.started_at
    }

    /// `(white_in_check, black_in_check)`. Both false once the game is over.
    pub fn check_flags(&self) -> (bool, bool) {
        if self.status.is_terminal() {
            return (false, false);
        }
        (
            is_king_in_check(&self.board, Color::White),
            is_king_in_check(&self.board, Color::Black),
        )
    }

    /// Check every precondition of [`execute_move`](Self::execute_move) without mutating.
    pub fn validate_move(&self, from: Square, to: Square, now: DateTime<Utc>) -> Result<Piece, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver(self.status));
        }
        let piece = *self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSource(from))?;
        if !piece.is_ready(now) {
            return Err(MoveError::NotReady {
                square: from,
                ready_at: piece.cooldown_until,
            });
        }
        if !is_move_legal(piece.kind, piece.color, from, to, &self.board) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }

    /// Apply a move proposed at instant `now`.
    ///
    /// `now` is sampled once by the caller and used for both the readiness
    /// check and the new cooldown.
    pub fn execute_move(
        &mut self,
        from: Square,
        to: Square,
        now: DateTime<Utc>,
    ) -> Result<MoveOutcome, MoveError> {
        let mut piece = self.validate_move(from, to, now)?;

        let record = MoveRecord {
            piece_id: piece.id,
            piece_type: piece.kind,
            piece_color: piece.color,
            from,
            to,
            timestamp: now,
        };
        self.history.push(record.clone());

        self.cooldowns.arm(&mut piece, now);
        self.board.remove(from);
        let captured = self.board.put(to, piece);

        debug!(
            piece = %piece.kind,
            color = %piece.color,
            %from,
            %to,
            captured = ?captured.map(|p| p.kind),
            ready_at = %piece.cooldown_until,
            "Move executed"
        );

        if captured.is_some_and(|p| p.kind == PieceType::King) {
            self.status = GameStatus::Checkmate {
                winner: piece.color,
            };
            info!(winner = %piece.color, moves = self.history.len(), "King captured");
        } else if is_insufficient_material(&self.board) {
            self.status = GameStatus::Draw;
            info!(pieces = self.board.piece_count(), "Draw by insufficient material");
        }

        Ok(MoveOutcome {
            record,
            captured,
            status: self.status,
        })
    }
}
