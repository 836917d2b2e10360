//! Random, cooldown-aware opponent.
//!
//! The decision itself ([`choose_move`]) is a pure function of board, color,
//! instant and RNG. Timing is the caller's business: something external calls
//! [`OpponentSelector::tick`] on the difficulty's cadence.

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{trace, warn};

use crate::board::Board;
use crate::game::{GameSession, MoveOutcome};
use crate::piece::Color;
use crate::rules::legal_destinations;
use crate::square::Square;

/// Pick a ready piece of `color` uniformly, then one of its legal destinations
/// uniformly. `None` when no piece is ready or the chosen piece has no move.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<(Square, Square)> {
    let ready: Vec<Square> = board
        .pieces_of(color)
        .filter(|(_, p)| p.is_ready(now))
        .map(|(sq, _)| sq)
        .collect();

    let Some(&from) = ready.choose(rng) else {
        trace!(%color, "No ready pieces, skipping tick");
        return None;
    };

    let destinations = legal_destinations(from, board);
    let Some(&to) = destinations.choose(rng) else {
        trace!(%color, %from, "Chosen piece has no legal move, skipping tick");
        return None;
    };

    Some((from, to))
}

pub struct OpponentSelector {
    color: Color,
    rng: SmallRng,
}

impl OpponentSelector {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic selector for tests and replays.
    pub fn seeded(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn decide(&mut self, board: &Board, now: DateTime<Utc>) -> Option<(Square, Square)> {
        choose_move(board, self.color, now, &mut self.rng)
    }

    /// One scheduler tick: pick and play a move if the game is still running.
    pub fn tick(&mut self, session: &mut GameSession, now: DateTime<Utc>) -> Option<MoveOutcome> {
        if session.status().is_terminal() {
            return None;
        }
        let (from, to) = self.decide(session.board(), now)?;
        match session.execute_move(from, to, now) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                // choose_move only offers ready, legal moves.
                warn!(color = %self.color, error = %e, "Opponent move rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::new_initial_board;
    use crate::cooldown::CooldownConfig;
    use crate::game::GameStatus;
    use crate::piece::PieceType;
    use crate::rules::is_move_legal;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_choose_move_is_legal_for_own_color() {
        let board = new_initial_board();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let Some((from, to)) = choose_move(&board, Color::Black, t0(), &mut rng) else {
                continue;
            };
            let piece = board.get(from).unwrap();
            assert_eq!(piece.color, Color::Black);
            assert!(is_move_legal(piece.kind, piece.color, from, to, &board));
        }
    }

    #[test]
    fn test_skips_when_nothing_ready() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4).unwrap(), PieceType::King, Color::Black);
        board.place(Square::new(7, 4).unwrap(), PieceType::King, Color::White);
        board.place(Square::new(7, 0).unwrap(), PieceType::Rook, Color::White);
        let mut session = GameSession::with_board(board, CooldownConfig::default(), t0());

        // The only black piece moves and starts its five second cooldown.
        session
            .execute_move(Square::new(0, 4).unwrap(), Square::new(0, 3).unwrap(), t0())
            .unwrap();

        let mut selector = OpponentSelector::seeded(Color::Black, 1);
        assert!(selector.tick(&mut session, t0() + Duration::seconds(1)).is_none());
        assert_eq!(session.history().len(), 1);

        let outcome = selector.tick(&mut session, t0() + Duration::seconds(5)).unwrap();
        assert_eq!(outcome.record.piece_type, PieceType::King);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_skips_when_chosen_piece_is_stuck() {
        // The only black piece is a pawn blocked head-on.
        let mut board = Board::empty();
        board.place(Square::new(3, 3).unwrap(), PieceType::Pawn, Color::Black);
        board.place(Square::new(4, 3).unwrap(), PieceType::Rook, Color::White);
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(choose_move(&board, Color::Black, t0(), &mut rng), None);
    }

    #[test]
    fn test_tick_after_game_over_does_nothing() {
        let mut board = Board::empty();
        board.place(Square::new(7, 4).unwrap(), PieceType::King, Color::White);
        board.place(Square::new(6, 4).unwrap(), PieceType::King, Color::Black);
        let mut session = GameSession::with_board(board, CooldownConfig::default(), t0());
        session
            .execute_move(Square::new(7, 4).unwrap(), Square::new(6, 4).unwrap(), t0())
            .unwrap();
        assert_eq!(session.status(), GameStatus::Checkmate { winner: Color::White });

        let mut selector = OpponentSelector::seeded(Color::White, 11);
        assert!(selector.tick(&mut session, t0() + Duration::minutes(1)).is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let board = new_initial_board();
        let mut a = OpponentSelector::seeded(Color::White, 42);
        let mut b = OpponentSelector::seeded(Color::White, 42);
        for _ in 0..10 {
            assert_eq!(a.decide(&board, t0()), b.decide(&board, t0()));
        }
    }
}
