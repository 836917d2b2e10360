//! Engine error types

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::game::GameStatus;
use crate::square::Square;

/// A proposed move the caller should not have offered. Nothing is applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("No piece at {0}")]
    NoPieceAtSource(Square),

    #[error("Piece at {square} is cooling down until {ready_at}")]
    NotReady {
        square: Square,
        ready_at: DateTime<Utc>,
    },

    #[error("Illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("Game already over: {0:?}")]
    GameAlreadyOver(GameStatus),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Cooldown must be positive, got {0} ms")]
    NonPositiveCooldown(i64),
}
