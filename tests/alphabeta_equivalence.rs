use othellobot::{Board, GameState, RandomMover, SearchParams, Searcher, Strategy};
use proptest::prelude::*;

/// Random playout of up to `plies` plies from the 6x6 opening.
fn random_position(seed: u64, plies: usize) -> Board {
    let mut rng = RandomMover::new(seed);
    let mut b = Board::new(6).expect("valid size");
    for _ in 0..plies {
        if b.is_terminal() {
            break;
        }
        b = match rng.decide_move(&b) {
            Some(mv) => b.apply_move(mv),
            None => b.forced_pass(),
        };
    }
    b
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn pruned_search_matches_full_minimax(seed in any::<u64>(), plies in 0usize..24, depth in 0u32..3) {
        let b = random_position(seed, plies);
        let full = SearchParams { max_depth: depth, use_pruning: false, ..SearchParams::default() };
        let pruned = SearchParams { use_pruning: true, ..full };

        let r_full = Searcher::new(full).search(&b);
        let r_pruned = Searcher::new(pruned).search(&b);

        prop_assert_eq!(r_pruned.best_move, r_full.best_move);
        prop_assert_eq!(r_pruned.utility, r_full.utility);
        prop_assert!(r_pruned.nodes <= r_full.nodes);
    }

    #[test]
    fn decision_is_legal_or_absent(seed in any::<u64>(), plies in 0usize..30) {
        let b = random_position(seed, plies);
        let mut s = Searcher::new(SearchParams { max_depth: 1, ..SearchParams::default() });
        match s.decide_move(&b) {
            Some(mv) => prop_assert!(b.legal_moves().contains(&mv)),
            None => prop_assert!(b.legal_moves().is_empty()),
        }
    }
}
