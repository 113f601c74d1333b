use thiserror::Error;

use crate::board::{Coord, Player};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board side length must be even and within 4..=26, got {0}")]
    InvalidSize(usize),
    #[error("{0} is outside the board")]
    OutOfBounds(Coord),
    #[error("illegal move: {0}")]
    IllegalMove(Coord),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{strategy} returned no move for {player} with {legal} legal moves")]
    NoMove { strategy: String, player: Player, legal: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}
