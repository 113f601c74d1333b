//! Move ordering for alpha-beta: corners first, then cells close to the
//! centre, with the child heuristic as a tie-break. The same order is used
//! for both roles.

use crate::board::{Coord, GameState, Player};
use crate::search::eval::h_utility_for;

pub fn is_corner(side: usize, at: Coord) -> bool {
    let edge = |x: usize| x == 0 || x + 1 == side;
    edge(at.row) && edge(at.col)
}

/// Euclidean distance from the centre cell `(side/2, side/2)`.
pub fn distance_from_center(side: usize, at: Coord) -> f64 {
    let half = side / 2;
    let dx = half.abs_diff(at.row) as f64;
    let dy = half.abs_diff(at.col) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Lower is explored earlier. Corners get the side length subtracted, which
/// puts them ahead of every other cell.
pub fn ordering_cost(side: usize, at: Coord) -> f64 {
    let cost = distance_from_center(side, at);
    if is_corner(side, at) {
        cost - side as f64
    } else {
        cost
    }
}

/// Sort `candidates` ascending by (ordering cost, `secondary`). Stable, so
/// full ties keep the input order.
pub fn rank_candidates<F>(side: usize, candidates: &[Coord], mut secondary: F) -> Vec<Coord>
where
    F: FnMut(Coord) -> f64,
{
    let mut keyed: Vec<(f64, f64, Coord)> = candidates
        .iter()
        .map(|&c| (ordering_cost(side, c), secondary(c), c))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));
    keyed.into_iter().map(|(_, _, c)| c).collect()
}

/// Order `moves` (legal in `state`) for exploration. With `tie_break`,
/// equal-cost candidates are ordered by the cutoff heuristic of the resulting
/// position, ascending.
pub fn order_moves<S: GameState>(
    state: &S,
    moves: &[Coord],
    perspective: Player,
    tie_break: bool,
) -> Vec<Coord> {
    let side = state.side_length();
    if tie_break {
        rank_candidates(side, moves, |c| h_utility_for(&state.apply_move(c), perspective))
    } else {
        rank_candidates(side, moves, |_| 0.0)
    }
}

pub fn prioritize_moves<S: GameState>(state: &S, perspective: Player, tie_break: bool) -> Vec<Coord> {
    order_moves(state, &state.legal_moves(), perspective, tie_break)
}
