use crate::board::{GameState, Player};

/// Weight of a disc in the cutoff heuristic.
pub const COIN_PARITY_WEIGHT: f64 = 0.1;
/// Weight of an available move in the cutoff heuristic.
pub const MOBILITY_WEIGHT: f64 = 0.9;

pub const WIN: f64 = 1.0;
pub const DRAW: f64 = 0.0;
pub const LOSS: f64 = -1.0;

// Final outcome from `perspective`: +1 win, 0 tie, -1 loss.
pub fn utility_for<S: GameState>(state: &S, perspective: Player) -> f64 {
    let (one, two) = state.token_counts();
    let for_two = match one.cmp(&two) {
        std::cmp::Ordering::Greater => LOSS,
        std::cmp::Ordering::Less => WIN,
        std::cmp::Ordering::Equal => DRAW,
    };
    orient(for_two, perspective)
}

/// Terminal utility with player two as the engine's side.
pub fn utility<S: GameState>(state: &S) -> f64 {
    utility_for(state, Player::Two)
}

/// Coin parity blended with mobility, normalised by board area.
///
/// Only the side to move has queryable moves, so the other side's mobility
/// comes from the forced-pass view of the same position. The result does not
/// depend on who is to move in `state`.
pub fn h_utility_for<S: GameState>(state: &S, perspective: Player) -> f64 {
    let (tokens_one, tokens_two) = state.token_counts();
    let to_move = state.legal_moves().len();
    let waiting = state.forced_pass().legal_moves().len();
    let (moves_one, moves_two) = match state.side_to_move() {
        Player::One => (to_move, waiting),
        Player::Two => (waiting, to_move),
    };

    let h_one = tokens_one as f64 * COIN_PARITY_WEIGHT + moves_one as f64 * MOBILITY_WEIGHT;
    let h_two = tokens_two as f64 * COIN_PARITY_WEIGHT + moves_two as f64 * MOBILITY_WEIGHT;
    let side = state.side_length() as f64;
    orient((h_two - h_one) / (side * side), perspective)
}

/// Cutoff heuristic with player two as the engine's side.
pub fn h_utility<S: GameState>(state: &S) -> f64 {
    h_utility_for(state, Player::Two)
}

fn orient(for_two: f64, perspective: Player) -> f64 {
    match perspective {
        Player::Two => for_two,
        Player::One => -for_two,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn utility_follows_disc_majority() {
        let p1_ahead = Board::from_rows(&["XXXX", "XXXX", "XXOO", "OOOO"], Player::One).unwrap();
        assert_eq!(utility(&p1_ahead), LOSS);
        assert_eq!(utility_for(&p1_ahead, Player::One), WIN);

        let tied = Board::from_rows(&["XXXX", "XXXX", "OOOO", "OOOO"], Player::Two).unwrap();
        assert_eq!(utility(&tied), DRAW);
    }

    #[test]
    fn start_position_is_balanced() {
        // 2 discs and 4 moves each
        assert_eq!(h_utility(&Board::standard()), 0.0);
    }

    #[test]
    fn heuristic_ignores_side_to_move() {
        let b = Board::standard().apply_move(crate::board::Coord::new(2, 3));
        assert_eq!(h_utility(&b), h_utility(&b.forced_pass()));
    }

    #[test]
    fn heuristic_weights() {
        // One to move with a single reply at c1; Two has nothing.
        let b = Board::from_rows(&["XO..", "....", "....", "...."], Player::One).unwrap();
        let h_one = 1.0 * COIN_PARITY_WEIGHT + 1.0 * MOBILITY_WEIGHT;
        let h_two = 1.0 * COIN_PARITY_WEIGHT;
        let expected = (h_two - h_one) / 16.0;
        assert!((h_utility(&b) - expected).abs() < 1e-12);
        assert!((h_utility_for(&b, Player::One) + expected).abs() < 1e-12);
    }
}
