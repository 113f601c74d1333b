use othellobot::{Board, Coord, GameState, Player};

#[test]
fn corner_sorts_first_on_empty_board() {
    use othellobot::search::ordering::rank_candidates;
    let candidates = [Coord::new(3, 3), Coord::new(2, 5), Coord::new(0, 7), Coord::new(7, 6), Coord::new(4, 4)];
    let ranked = rank_candidates(8, &candidates, |_| 0.0);
    assert_eq!(ranked[0], Coord::new(0, 7));
    // centre cell next, it has zero distance
    assert_eq!(ranked[1], Coord::new(4, 4));
}

#[test]
fn ordering_is_deterministic() {
    use othellobot::search::ordering::prioritize_moves;
    let b = Board::standard()
        .apply_move(Coord::new(2, 3))
        .apply_move(Coord::new(2, 2))
        .apply_move(Coord::new(2, 1));
    let first = prioritize_moves(&b, Player::Two, true);
    let second = prioritize_moves(&b, Player::Two, true);
    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_by_key(|c| (c.row, c.col));
    assert_eq!(sorted, b.legal_moves(), "ordering must be a permutation of the legal moves");
}

#[test]
fn closest_replies_come_first_for_player_two() {
    use othellobot::search::ordering::prioritize_moves;
    let b = Board::standard().forced_pass();
    let ordered = prioritize_moves(&b, Player::Two, true);
    assert_eq!(ordered.len(), 4);
    let mut head = ordered[..2].to_vec();
    head.sort_by_key(|c| (c.row, c.col));
    // (3,5) and (5,3) sit sqrt(2) from the centre, the other two sit 2 away
    assert_eq!(head, vec![Coord::new(3, 5), Coord::new(5, 3)]);
}

#[test]
fn pruning_reduces_nodes() {
    use othellobot::{SearchParams, Searcher};
    let b = Board::standard().apply_move(Coord::new(2, 3));
    let mut s1 = Searcher::default();
    let p1 = SearchParams { max_depth: 3, use_pruning: false, ..SearchParams::default() };
    let r1 = s1.search_with_params(&b, p1);

    let mut s2 = Searcher::default();
    let p2 = SearchParams { use_pruning: true, ..p1 };
    let r2 = s2.search_with_params(&b, p2);

    assert_eq!(r2.best_move, r1.best_move);
    assert_eq!(r2.utility, r1.utility);
    assert_eq!(r1.cutoffs, 0);
    assert!(r2.nodes < r1.nodes, "pruning should reduce nodes: {} vs {}", r2.nodes, r1.nodes);
}

#[test]
fn tiebreak_does_not_change_value() {
    use othellobot::{SearchParams, Searcher};
    let b = Board::new(6).unwrap();
    let p1 = SearchParams { max_depth: 3, use_tiebreak: false, ..SearchParams::default() };
    let r1 = Searcher::new(p1).search(&b);
    let r2 = Searcher::new(SearchParams { use_tiebreak: true, ..p1 }).search(&b);
    assert_eq!(r1.utility, r2.utility);
}
