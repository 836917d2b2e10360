//! Headless real-time arena
//!
//! Plays one session on tokio timers: a scripted player drives White and the
//! difficulty-tiered opponent drives Black. Both movers share one session
//! behind a mutex, so moves are applied one at a time.

mod config;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use zchess_core::{Color, CooldownConfig, GameSession, GameStats, GameStatus, OpponentSelector};

use crate::config::ArenaConfig;

/// Drive one side until the game ends.
async fn run_side(session: Arc<Mutex<GameSession>>, mut selector: OpponentSelector, every: std::time::Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let mut session = session.lock().await;
        if session.status().is_terminal() {
            return;
        }

        // Sampled once, inside the lock, for both readiness and the new cooldown.
        let now = Utc::now();
        let Some(outcome) = selector.tick(&mut session, now) else {
            continue;
        };

        let record = &outcome.record;
        info!(
            color = %record.piece_color,
            piece = %record.piece_type,
            from = %record.from,
            to = %record.to,
            captured = ?outcome.captured.map(|p| p.kind),
            "Move"
        );

        let (white_check, black_check) = session.check_flags();
        if white_check || black_check {
            info!(white_check, black_check, "Check");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading RUST_LOG
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ArenaConfig::from_env()?;
    info!(
        difficulty = %config.difficulty,
        player_cooldown_ms = config.player_cooldown_ms,
        player_tick_ms = config.player_tick_ms,
        opponent_tick_ms = config.difficulty.tick_interval_ms(),
        seed = ?config.seed,
        "Arena config loaded"
    );

    let cooldowns =
        CooldownConfig::for_opponent(config.player_cooldown_ms, Color::Black, config.difficulty)?;
    let session = Arc::new(Mutex::new(GameSession::new(cooldowns, Utc::now())));

    let (player, opponent) = match config.seed {
        Some(seed) => (
            OpponentSelector::seeded(Color::White, seed),
            OpponentSelector::seeded(Color::Black, seed.wrapping_add(1)),
        ),
        None => (
            OpponentSelector::new(Color::White),
            OpponentSelector::new(Color::Black),
        ),
    };

    let white = tokio::spawn(run_side(session.clone(), player, config.player_tick()));
    let black = tokio::spawn(run_side(
        session.clone(),
        opponent,
        config.difficulty.tick_interval(),
    ));
    let aborts = [white.abort_handle(), black.abort_handle()];

    tokio::select! {
        _ = async { let _ = tokio::join!(white, black); } => {}
        _ = tokio::time::sleep(config.time_limit()) => {
            warn!(max_seconds = config.max_seconds, "Time limit reached, abandoning session");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
        }
    }
    for handle in aborts {
        handle.abort();
    }

    let session = session.lock().await;
    let elapsed = session.elapsed(Utc::now());
    let mut stats = GameStats::default();
    stats.record(session.status(), Color::White, elapsed);

    let result = match session.status() {
        GameStatus::Playing => "unfinished".to_string(),
        GameStatus::Draw => "draw".to_string(),
        GameStatus::Checkmate { winner } => format!("{winner} captured the king"),
    };
    info!(
        result = %result,
        moves = session.history().len(),
        elapsed_secs = elapsed.num_seconds(),
        position = %session.board().placement_fen(),
        elo = stats.elo,
        "Session finished"
    );

    Ok(())
}
