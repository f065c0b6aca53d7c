//! Shuffle throughput. Decks here are small (a few dozen entries), but
//! the scrambler can churn through long phrases, so the bench covers both
//! sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parlor::core::GameRng;

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = GameRng::new(42);

    let mut deck: Vec<u32> = (0..25).collect();
    c.bench_function("shuffle_25", |b| {
        b.iter(|| rng.shuffle(black_box(&mut deck)));
    });

    let mut long: Vec<u32> = (0..1000).collect();
    c.bench_function("shuffle_1000", |b| {
        b.iter(|| rng.shuffle(black_box(&mut long)));
    });
}

criterion_group!(benches, bench_shuffle);
criterion_main!(benches);
