//! Lexer Benchmarks
//!
//! Measures per-line token throughput and document re-lexing.
//! Run with: `cargo bench --package bogl-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use bogl_lex::{Document, Lexer, LexerState};

const GAME: &str = r#"game ConnectFour

{- A 7x6 board. Players take turns dropping
   pieces into a column. -}
type Board = Array (7,6) of Player & {Empty}
type Input = Int

initialBoard : Board
initialBoard!(x,y) = Empty

-- the lowest free row in a column
nextRow : (Board, Int) -> Int
nextRow(b, c) = let n = countCol(b, c, Empty) in 7 - n

goFirst : Player
goFirst = X

outcome : (Board, Player) -> Bool
outcome(b, p) = inARow(4, p, b) || isFull(b)

msg : String
msg = "four in a row \
      \wins the game"
"#;

fn token_count(source: &str) -> usize {
    let lexer = Lexer::new();
    let mut state = LexerState::Normal;
    source
        .lines()
        .map(|line| lexer.tokens(line, &mut state).count())
        .sum()
}

fn bench_lexer_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let line = "isValid(b,p) = if b!p == Empty then True else False";
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("single_line", |b| b.iter(|| token_count(black_box(line))));

    group.throughput(Throughput::Bytes(GAME.len() as u64));
    group.bench_function("game_source", |b| b.iter(|| token_count(black_box(GAME))));

    group.finish();
}

fn bench_lexer_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_stress");

    let comment = format!("{}{}", "{- ".repeat(500), "-} ".repeat(500));
    group.throughput(Throughput::Bytes(comment.len() as u64));
    group.bench_function("nested_comments", |b| b.iter(|| token_count(black_box(&comment))));

    let operators = "<+> :: ==> --> && || ".repeat(200);
    group.throughput(Throughput::Bytes(operators.len() as u64));
    group.bench_function("operators", |b| b.iter(|| token_count(black_box(&operators))));

    let large = GAME.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large_file", |b| b.iter(|| token_count(black_box(&large))));

    group.finish();
}

fn bench_document_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    let source = GAME.repeat(20);
    group.bench_function("build", |b| b.iter(|| Document::new(black_box(&source))));

    group.bench_function("edit_without_state_change", |b| {
        let mut doc = Document::new(&source);
        b.iter(|| doc.replace_line(black_box(10), "nextRow : (Board, Int) -> Int"))
    });

    group.bench_function("open_and_close_comment", |b| {
        let mut doc = Document::new(&source);
        b.iter(|| {
            let opened = doc.replace_line(black_box(1), "{-");
            let closed = doc.replace_line(black_box(1), "");
            (opened, closed)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_lines, bench_lexer_stress, bench_document_edits);
criterion_main!(benches);
