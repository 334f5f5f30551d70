use criterion::{criterion_group, criterion_main, Criterion};
use console_games_common::games::blackjack::BlackjackRound;
use console_games_common::games::tictactoe::{Board, Marker, choose_computer_move};
use console_games_common::games::SessionRng;

fn board_from(marks: &[(usize, Marker)]) -> Board {
    let mut board = Board::new();
    for &(position, marker) in marks {
        board.apply_move(position, marker).expect("bench board positions are free");
    }
    board
}

fn bench_computer_move_block() {
    let board = board_from(&[(1, Marker::X), (2, Marker::X), (5, Marker::O)]);
    let mut session_rng = SessionRng::new(42);
    choose_computer_move(&board, Marker::X, Marker::O, &mut session_rng);
}

fn bench_computer_move_random_fallback() {
    let board = board_from(&[(5, Marker::X), (1, Marker::O), (9, Marker::X), (3, Marker::O)]);
    let mut session_rng = SessionRng::new(42);
    choose_computer_move(&board, Marker::X, Marker::O, &mut session_rng);
}

fn bench_blackjack_round() {
    let mut session_rng = SessionRng::new(42);
    if let Ok(mut round) = BlackjackRound::deal(&mut session_rng) {
        let _ = round.player_stay();
        let _ = round.play_dealer();
    }
}

fn computer_move_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("computer_move");

    group.bench_function("tictactoe_block", |b| {
        b.iter(bench_computer_move_block)
    });

    group.bench_function("tictactoe_random_fallback", |b| {
        b.iter(bench_computer_move_random_fallback)
    });

    group.bench_function("blackjack_dealer_round", |b| {
        b.iter(bench_blackjack_round)
    });

    group.finish();
}

criterion_group!(benches, computer_move_bench);
criterion_main!(benches);
