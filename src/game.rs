use crate::board::{Board, Coord, GameState, Player};
use crate::error::GameError;
use crate::strategy::Strategy;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub first: String,
    pub second: String,
    pub side_length: usize,
    /// Plies in order; `None` is a forced pass.
    pub moves: Vec<Option<Coord>>,
    pub tokens: (u32, u32),
    /// `None` on a tie or an unfinished game.
    pub winner: Option<Player>,
    /// False when `max_plies` ran out before the game ended.
    pub finished: bool,
}

/// Play `first` (player one) against `second` (player two) from `start`.
/// Every move goes through `Board::play`, so a misbehaving strategy surfaces
/// as an error rather than a corrupt board.
pub fn play_game(
    first: &mut dyn Strategy<Board>,
    second: &mut dyn Strategy<Board>,
    start: Board,
    max_plies: usize,
) -> Result<GameRecord, GameError> {
    let mut board = start;
    let mut moves = Vec::new();
    let mut finished = false;
    while moves.len() < max_plies {
        if board.is_terminal() {
            finished = true;
            break;
        }
        let player = board.side_to_move();
        let legal = board.legal_moves().len();
        if legal == 0 {
            debug!("{player} passes");
            moves.push(None);
            board = board.forced_pass();
            continue;
        }
        let mover: &mut dyn Strategy<Board> = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };
        let mv = mover.decide_move(&board).ok_or_else(|| GameError::NoMove {
            strategy: mover.name().to_string(),
            player,
            legal,
        })?;
        debug!("{player} ({}) plays {mv}", mover.name());
        board = board.play(mv)?;
        moves.push(Some(mv));
    }
    if !finished {
        finished = board.is_terminal();
    }

    Ok(GameRecord {
        first: first.name().to_string(),
        second: second.name().to_string(),
        side_length: board.side_length(),
        moves,
        tokens: board.token_counts(),
        winner: if finished { board.leader() } else { None },
        finished,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RandomMover;

    struct Stubborn;

    impl Strategy<Board> for Stubborn {
        fn name(&self) -> &str { "stubborn" }
        fn decide_move(&mut self, _state: &Board) -> Option<Coord> { Some(Coord::new(0, 0)) }
    }

    #[test]
    fn random_game_runs_to_completion() {
        let mut a = RandomMover::new(1);
        let mut b = RandomMover::new(2);
        let rec = play_game(&mut a, &mut b, Board::new(6).unwrap(), 200).unwrap();
        assert!(rec.finished);
        let (one, two) = rec.tokens;
        assert!(one + two <= 36);
        // every placement adds exactly one disc
        let placed = rec.moves.iter().filter(|m| m.is_some()).count() as u32;
        assert_eq!(one + two, 4 + placed);
    }

    #[test]
    fn illegal_move_is_an_error() {
        let mut a = Stubborn;
        let mut b = RandomMover::new(2);
        let err = play_game(&mut a, &mut b, Board::standard(), 10).unwrap_err();
        assert!(matches!(err, GameError::Board(_)));
    }

    #[test]
    fn ply_limit_stops_early() {
        let mut a = RandomMover::new(3);
        let mut b = RandomMover::new(4);
        let rec = play_game(&mut a, &mut b, Board::standard(), 4).unwrap();
        assert_eq!(rec.moves.len(), 4);
        assert!(!rec.finished);
        assert_eq!(rec.winner, None);
    }
}
