//! Per-piece cooldown scheduling.
//!
//! A piece's own `cooldown_until` is the single source of truth for whether it
//! may move. The only way it changes is [`CooldownConfig::arm`], called after
//! the piece moves, so cooldowns only ever move forward.

use chrono::{DateTime, Duration, Utc};

use crate::difficulty::Difficulty;
use crate::error::ConfigError;
use crate::piece::{Color, Piece};

/// Default cooldown for a human-controlled side.
pub const DEFAULT_COOLDOWN_MS: i64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownConfig {
    pub white: Duration,
    pub black: Duration,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            white: Duration::milliseconds(DEFAULT_COOLDOWN_MS),
            black: Duration::milliseconds(DEFAULT_COOLDOWN_MS),
        }
    }
}

impl CooldownConfig {
    pub fn from_millis(white_ms: i64, black_ms: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            white: positive_millis(white_ms)?,
            black: positive_millis(black_ms)?,
        })
    }

    /// Player side uses `player_ms`; the automated `opponent` uses its tier cooldown.
    pub fn for_opponent(
        player_ms: i64,
        opponent: Color,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        let opponent_ms = difficulty.cooldown_ms();
        match opponent {
            Color::White => Self::from_millis(opponent_ms, player_ms),
            Color::Black => Self::from_millis(player_ms, opponent_ms),
        }
    }

    pub fn duration(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Re-arm a piece that has just moved.
    pub fn arm(&self, piece: &mut Piece, now: DateTime<Utc>) {
        piece.cooldown_until = now + self.duration(piece.color);
    }
}

/// Time left before `piece` is ready, zero if it already is.
pub fn remaining(piece: &Piece, now: DateTime<Utc>) -> Duration {
    if piece.is_ready(now) {
        Duration::zero()
    } else {
        piece.cooldown_until - now
    }
}

fn positive_millis(ms: i64) -> Result<Duration, ConfigError> {
    if ms <= 0 {
        return Err(ConfigError::NonPositiveCooldown(ms));
    }
    Ok(Duration::milliseconds(ms))
}
