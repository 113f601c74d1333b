use criterion::{criterion_group, criterion_main, Criterion, black_box};
use othellobot::{Board, SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    let b = Board::standard();
    c.bench_function("search_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(SearchParams { max_depth: 4, ..SearchParams::default() });
            let r = s.search(black_box(&b));
            black_box(r.nodes)
        })
    });
    c.bench_function("minimax_depth_3_startpos", |ben| {
        ben.iter(|| {
            let p = SearchParams { max_depth: 3, use_pruning: false, ..SearchParams::default() };
            let r = Searcher::new(p).search(black_box(&b));
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
