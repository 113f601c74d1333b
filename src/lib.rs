// Othello engine: depth-bounded alpha-beta search over a pluggable board
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod search;
pub mod strategy;

pub use board::{Board, Coord, GameState, Player};
pub use search::alphabeta::{SearchParams, SearchResult, Searcher};
pub use strategy::{RandomMover, Strategy};
