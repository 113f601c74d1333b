use crate::board::Coord;
use crate::search::alphabeta::SearchResult;
use log::{debug, info};

/// Hooks called by the searcher at decision points. Both default to no-ops.
pub trait SearchObserver: Send {
    /// A root candidate finished searching with `utility`.
    fn on_root_move(&mut self, _mv: Coord, _utility: f64) {}

    /// The search returned.
    fn on_decision(&mut self, _result: &SearchResult) {}
}

/// Forwards root evaluations and decisions to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_root_move(&mut self, mv: Coord, utility: f64) {
        debug!("{} utility: {:.4}", mv, utility);
    }

    fn on_decision(&mut self, result: &SearchResult) {
        match result.best_move {
            Some(mv) => info!(
                "moves: {} utility: {:.4} (nodes={} cutoffs={} passes={})",
                mv, result.utility, result.nodes, result.cutoffs, result.passes
            ),
            None => info!("no legal move at root, utility: {:.4}", result.utility),
        }
    }
}
