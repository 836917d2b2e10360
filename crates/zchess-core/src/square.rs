//! Board coordinates.
//!
//! Rank 0 is Black's back rank and rank 7 is White's, so a square prints as
//! `<file letter><8 - rank>` in algebraic form.

use std::fmt;

use serde::{Deserialize, Serialize};

const FILE_NAMES: &[u8; 8] = b"abcdefgh";

/// An on-board square. Only constructible through [`Square::new`], so every
/// value indexes the board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    rank: u8,
    file: u8,
}

#[derive(Deserialize)]
struct RawSquare {
    rank: u8,
    file: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = String;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.rank, raw.file)
            .ok_or_else(|| format!("square ({}, {}) is off the board", raw.rank, raw.file))
    }
}

impl Square {
    /// Build a square, or `None` if either coordinate is off the board.
    pub fn new(rank: u8, file: u8) -> Option<Self> {
        (rank < 8 && file < 8).then_some(Self { rank, file })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    /// Square at a signed offset from this one, if it stays on the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank-major then file-minor.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILE_NAMES[self.file as usize] as char,
            8 - self.rank
        )
    }
}
