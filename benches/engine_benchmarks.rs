//! Benchmarks for move generation and the computer opponent.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chessroom::board::eval::evaluate;
use chessroom::board::search::search;
use chessroom::{Board, Difficulty, SearchLimits};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let board = Board::new();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let kiwipete = Board::from_fen(KIWIPETE);

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    // Kiwipete (many moves available)
    let kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));
    group.bench_function("kiwipete_status", |b| b.iter(|| black_box(kiwipete.status())));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for difficulty in Difficulty::ALL {
        group.bench_with_input(
            BenchmarkId::new("startpos", difficulty),
            &difficulty,
            |b, &difficulty| {
                let board = Board::new();
                let limits = SearchLimits::from(difficulty);
                b.iter(|| search(&board, board.side_to_move(), &limits))
            },
        );
    }

    // Tactical position
    let tactical =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    group.bench_function("tactical_medium", |b| {
        let limits = SearchLimits::from(Difficulty::Medium);
        b.iter(|| search(&tactical, tactical.side_to_move(), &limits))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        ),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(evaluate(board)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
