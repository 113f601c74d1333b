use crate::board::{Coord, GameState};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Something that picks the next move for the side to move.
pub trait Strategy<S: GameState> {
    fn name(&self) -> &str;

    /// `None` only when the side to move has no legal move.
    fn decide_move(&mut self, state: &S) -> Option<Coord>;
}

/// Uniformly random legal move; the baseline opponent.
pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl<S: GameState> Strategy<S> for RandomMover {
    fn name(&self) -> &str {
        "random"
    }

    fn decide_move(&mut self, state: &S) -> Option<Coord> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.gen_range(0..moves.len())])
    }
}
