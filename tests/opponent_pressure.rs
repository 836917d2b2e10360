/// Two random selectors playing each other on a simulated clock.
///
/// Exercises the engine under continuous pressure and checks the invariants
/// that must hold no matter which moves get picked.
use chrono::{DateTime, Duration, TimeZone, Utc};
use zchess_core::{
    Color, CooldownConfig, Difficulty, GameSession, GameStatus, GameStats, MoveRecord,
    OpponentSelector,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Tick both sides every 100 ms of simulated time until the game ends.
fn play_out(seed: u64, max_ticks: u32) -> (GameSession, DateTime<Utc>) {
    let cooldowns = CooldownConfig::for_opponent(400, Color::Black, Difficulty::Hard).unwrap();
    let mut session = GameSession::new(cooldowns, t0());
    let mut white = OpponentSelector::seeded(Color::White, seed);
    let mut black = OpponentSelector::seeded(Color::Black, seed ^ 0x9E37_79B9);

    let mut now = t0();
    for _ in 0..max_ticks {
        if session.status().is_terminal() {
            break;
        }
        now += Duration::milliseconds(100);
        white.tick(&mut session, now);
        black.tick(&mut session, now);
    }
    (session, now)
}

#[test]
fn test_random_games_respect_cooldowns() {
    for seed in 0..8u64 {
        let (session, _) = play_out(seed, 5_000);
        let cooldowns = *session.cooldowns();

        // No piece moved again before its own cooldown elapsed.
        let history: &[MoveRecord] = session.history();
        for (i, later) in history.iter().enumerate() {
            if let Some(prev) = history[..i]
                .iter()
                .rev()
                .find(|r| r.piece_id == later.piece_id)
            {
                let ready_at = prev.timestamp + cooldowns.duration(prev.piece_color);
                assert!(later.timestamp >= ready_at, "seed {seed}: piece moved while cooling down");
            }
        }

        // History is ordered by execution time.
        assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}

#[test]
fn test_random_games_terminate_consistently() {
    for seed in 100..106u64 {
        let (mut session, now) = play_out(seed, 20_000);
        let status = session.status();

        match status {
            GameStatus::Checkmate { winner } => {
                let last = session.history().last().unwrap();
                assert_eq!(last.piece_color, winner);
            }
            GameStatus::Draw => assert!(session.board().piece_count() <= 3),
            GameStatus::Playing => {}
        }

        if status.is_terminal() {
            let moves = session.history().len();
            let mut late = OpponentSelector::seeded(Color::Black, seed);
            assert!(late.tick(&mut session, now + Duration::seconds(30)).is_none());
            assert_eq!(session.history().len(), moves);
            assert_eq!(session.status(), status);
        }
    }
}

#[test]
fn test_stats_fold_over_sessions() {
    let mut stats = GameStats::default();
    let mut decided = 0;
    for seed in 200..204u64 {
        let (session, now) = play_out(seed, 20_000);
        if session.status().is_terminal() {
            decided += 1;
        }
        stats.record(session.status(), Color::White, session.elapsed(now));
    }
    assert_eq!(stats.games_played(), decided);
    // Four games can never push Elo down to its floor.
    assert_eq!(
        stats.elo as i64,
        1000 + 25 * (stats.wins as i64 - stats.losses as i64)
    );
}
