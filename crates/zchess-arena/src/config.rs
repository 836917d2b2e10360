//! Arena configuration from environment variables

use std::env;
use std::str::FromStr;
use std::time::Duration;

use zchess_core::cooldown::DEFAULT_COOLDOWN_MS;
use zchess_core::{ConfigError, Difficulty};

#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Cooldown for the scripted player's pieces (White)
    pub player_cooldown_ms: i64,

    /// Opponent tier: tick cadence and cooldown for Black
    pub difficulty: Difficulty,

    /// How often the scripted player proposes a move
    pub player_tick_ms: u64,

    /// Seed for both selectors; random when unset
    pub seed: Option<u64>,

    /// Abandon an unfinished session after this many seconds
    pub max_seconds: u64,
}

impl ArenaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let difficulty = match env::var("ZCHESS_DIFFICULTY") {
            Ok(v) => v.parse()?,
            Err(_) => Difficulty::default(),
        };

        Ok(Self {
            player_cooldown_ms: parse_var("ZCHESS_PLAYER_COOLDOWN_MS")?
                .unwrap_or(DEFAULT_COOLDOWN_MS),
            difficulty,
            player_tick_ms: non_zero(
                "ZCHESS_PLAYER_TICK_MS",
                parse_var("ZCHESS_PLAYER_TICK_MS")?.unwrap_or(500),
            )?,
            seed: parse_var("ZCHESS_SEED")?,
            max_seconds: parse_var("ZCHESS_MAX_SECONDS")?.unwrap_or(120),
        })
    }

    pub fn player_tick(&self) -> Duration {
        Duration::from_millis(self.player_tick_ms)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.max_seconds)
    }
}

/// Unset is `Ok(None)`; set but unparsable is an error.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(None),
    }
}

/// Timer periods must be non-zero.
fn non_zero(name: &'static str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}
