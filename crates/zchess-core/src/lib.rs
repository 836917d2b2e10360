//! Rules and state engine for real-time, turnless chess.
//!
//! Pieces move independently: after moving, a piece sits out its own cooldown
//! before it may move again. There is no side to move. The main entry point is
//! [`GameSession::execute_move`], fed either by a player or by an
//! [`OpponentSelector`] tick.

pub mod attacks;
pub mod board;
pub mod cooldown;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod material;
pub mod opponent;
pub mod piece;
pub mod rules;
pub mod square;
pub mod stats;

pub use attacks::{find_king, is_king_in_check, is_square_attacked};
pub use board::{new_initial_board, Board};
pub use cooldown::CooldownConfig;
pub use difficulty::Difficulty;
pub use error::{ConfigError, MoveError};
pub use game::{GameSession, GameStatus, MoveOutcome, MoveRecord};
pub use material::is_insufficient_material;
pub use opponent::OpponentSelector;
pub use piece::{Color, Piece, PieceId, PieceType};
pub use rules::{is_move_legal, legal_destinations};
pub use square::Square;
pub use stats::GameStats;
