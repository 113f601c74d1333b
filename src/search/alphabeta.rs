use crate::board::{Coord, GameState, Player};
use crate::search::eval::{h_utility_for, utility_for};
use crate::search::observer::SearchObserver;
use crate::search::ordering::order_moves;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Nodes deeper than this many plies are scored with the heuristic.
    pub max_depth: u32,
    pub use_pruning: bool,
    /// When off, lines are searched until the game ends and `max_depth` is
    /// ignored. Only practical on small boards or late positions.
    pub use_cutoff: bool,
    /// Break ordering-cost ties with the heuristic of the child position.
    pub use_tiebreak: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            use_pruning: true,
            use_cutoff: true,
            use_tiebreak: true,
        }
    }
}

/// Utility paired with the root move whose subtree produced it.
///
/// Below the root the coordinate is inherited: it is fixed once at the first
/// ply and passed down untouched, so a leaf value can be credited to the
/// right root move. `None` means the node sits above that first ply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub utility: f64,
    pub coord: Option<Coord>,
}

impl MoveResult {
    pub fn new(utility: f64, coord: Option<Coord>) -> Self {
        Self { utility, coord }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move at the root.
    pub best_move: Option<Coord>,
    /// Value of the root from the point of view of the side to move there.
    pub utility: f64,
    pub nodes: u64,
    pub cutoffs: u64,
    pub passes: u64,
}

/// Depth-bounded minimax with alpha-beta pruning over any `GameState`.
///
/// The maximizer is the side to move at the root. Utilities are oriented to
/// that side, so with player two to move the values match `eval::utility`
/// and `eval::h_utility` exactly.
pub struct Searcher {
    params: SearchParams,
    perspective: Player,
    nodes: u64,
    cutoffs: u64,
    passes: u64,
    observer: Option<Box<dyn SearchObserver>>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            perspective: Player::Two,
            nodes: 0,
            cutoffs: 0,
            passes: 0,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn SearchObserver>>) {
        self.observer = observer;
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn search_with_params<S: GameState>(
        &mut self,
        state: &S,
        params: SearchParams,
    ) -> SearchResult {
        self.params = params;
        self.search(state)
    }

    /// Search from the root. A root without legal moves still searches its
    /// forced-pass line for the utility, but reports no move.
    pub fn search<S: GameState>(&mut self, state: &S) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;
        self.passes = 0;
        self.perspective = state.side_to_move();

        let root = self.maximize(state, None, f64::NEG_INFINITY, f64::INFINITY, 0);
        let result = SearchResult {
            best_move: root.coord,
            utility: root.utility,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
            passes: self.passes,
        };
        if let Some(obs) = self.observer.as_mut() {
            obs.on_decision(&result);
        }
        result
    }

    fn is_cutoff(&self, depth: u32) -> bool {
        self.params.use_cutoff && depth > self.params.max_depth
    }

    fn maximize<S: GameState>(
        &mut self,
        state: &S,
        inherited: Option<Coord>,
        mut alpha: f64,
        beta: f64,
        depth: u32,
    ) -> MoveResult {
        self.nodes += 1;
        if state.is_terminal() {
            return MoveResult::new(utility_for(state, self.perspective), inherited);
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            // A pass still costs a ply.
            self.passes += 1;
            return self.minimize(&state.forced_pass(), inherited, alpha, beta, depth + 1);
        }
        if self.is_cutoff(depth) {
            return MoveResult::new(h_utility_for(state, self.perspective), inherited);
        }

        let mut best = MoveResult::new(f64::NEG_INFINITY, inherited);
        for mv in order_moves(state, &moves, self.perspective, self.params.use_tiebreak) {
            let carried = inherited.or(Some(mv));
            let child = self.minimize(&state.apply_move(mv), carried, alpha, beta, depth + 1);
            if inherited.is_none() {
                if let Some(obs) = self.observer.as_mut() {
                    obs.on_root_move(mv, child.utility);
                }
            }
            if child.utility > best.utility {
                best = child;
            }
            if child.utility > alpha {
                alpha = child.utility;
            }
            if self.params.use_pruning && alpha > beta {
                self.cutoffs += 1;
                break;
            }
        }
        best
    }

    fn minimize<S: GameState>(
        &mut self,
        state: &S,
        inherited: Option<Coord>,
        alpha: f64,
        mut beta: f64,
        depth: u32,
    ) -> MoveResult {
        self.nodes += 1;
        if state.is_terminal() {
            return MoveResult::new(utility_for(state, self.perspective), inherited);
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            self.passes += 1;
            return self.maximize(&state.forced_pass(), inherited, alpha, beta, depth + 1);
        }
        if self.is_cutoff(depth) {
            return MoveResult::new(h_utility_for(state, self.perspective), inherited);
        }

        let mut best = f64::INFINITY;
        for mv in order_moves(state, &moves, self.perspective, self.params.use_tiebreak) {
            let carried = inherited.or(Some(mv));
            let child = self.maximize(&state.apply_move(mv), carried, alpha, beta, depth + 1);
            if child.utility < best {
                best = child.utility;
            }
            if child.utility < beta {
                beta = child.utility;
            }
            if self.params.use_pruning && alpha > beta {
                self.cutoffs += 1;
                break;
            }
        }
        // The minimizer never picks a root move, it only bounds its value.
        MoveResult::new(best, inherited)
    }
}

impl<S: GameState> Strategy<S> for Searcher {
    fn name(&self) -> &str {
        "alphabeta"
    }

    fn decide_move(&mut self, state: &S) -> Option<Coord> {
        self.search(state).best_move
    }
}
