//! Running results tally for one player across sessions.
//!
//! Storage is the caller's concern; the struct is serde-friendly so it can be
//! persisted as-is.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::game::GameStatus;
use crate::piece::Color;

pub const STARTING_ELO: u32 = 1000;
pub const ELO_STEP: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub elo: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Shortest winning game in whole seconds. `None` until the first win.
    pub fastest_checkmate_secs: Option<i64>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            elo: STARTING_ELO,
            wins: 0,
            losses: 0,
            draws: 0,
            fastest_checkmate_secs: None,
        }
    }
}

impl GameStats {
    /// Fold a finished game into the tally from `player`'s point of view.
    /// A game still in progress is ignored.
    pub fn record(&mut self, status: GameStatus, player: Color, elapsed: Duration) {
        match status {
            GameStatus::Playing => {}
            GameStatus::Draw => self.draws += 1,
            GameStatus::Checkmate { winner } if winner == player => {
                self.wins += 1;
                self.elo += ELO_STEP;
                let secs = elapsed.num_seconds();
                self.fastest_checkmate_secs = Some(match self.fastest_checkmate_secs {
                    Some(best) => best.min(secs),
                    None => secs,
                });
            }
            GameStatus::Checkmate { .. } => {
                self.losses += 1;
                self.elo = self.elo.saturating_sub(ELO_STEP);
            }
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
