//! Board-state contract consumed by the search, plus the square Othello
//! board shipped with the crate.

pub mod othello;

pub use othello::Board;

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, the numbering used in token tallies.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// A board cell. Printed as column letter then 1-based row, so `d3` is
/// row 2, column 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col).ok().filter(|c| *c < 26) {
            Some(c) => write!(f, "{}{}", (b'a' + c) as char, self.row + 1),
            None => write!(f, "({},{})", self.row, self.col),
        }
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='z') => c as usize - 'a' as usize,
            _ => return Err(BoardError::Parse(format!("expected a column letter in {s:?}"))),
        };
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| BoardError::Parse(format!("expected a row number in {s:?}")))?;
        if row == 0 {
            return Err(BoardError::Parse(format!("rows start at 1 in {s:?}")));
        }
        Ok(Coord::new(row - 1, col))
    }
}

/// Snapshot of a two-player Othello-like position.
///
/// Implementations are immutable by convention: `apply_move` and
/// `forced_pass` hand back a fresh snapshot and leave `self` untouched, so a
/// search can fan out from one state without undo bookkeeping.
pub trait GameState: Clone {
    /// Neither side has a legal move.
    fn is_terminal(&self) -> bool;

    /// Discs held by (player one, player two).
    fn token_counts(&self) -> (u32, u32);

    /// Legal placements for the side to move.
    fn legal_moves(&self) -> Vec<Coord>;

    fn side_to_move(&self) -> Player;

    fn side_length(&self) -> usize;

    /// Place a disc for the side to move. `at` must come from `legal_moves`.
    fn apply_move(&self, at: Coord) -> Self;

    /// Hand the turn to the opponent without placing a disc.
    fn forced_pass(&self) -> Self;
}
