use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use probing_set::exchange_sort;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_random_10k(c: &mut Criterion) {
    let input: Vec<u64> = lcg(3).take(10_000).collect();
    c.bench_function("exchange_sort::random_10k", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                exchange_sort::sort(&mut v, |a: &u64, b: &u64| a.cmp(b));
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });
}

// Worst case for a last-element pivot.
fn bench_sorted_2k(c: &mut Criterion) {
    let input: Vec<u64> = (0..2_000).collect();
    c.bench_function("exchange_sort::sorted_2k", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                exchange_sort::sort(&mut v, |a: &u64, b: &u64| a.cmp(b));
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_std_sort_unstable_10k(c: &mut Criterion) {
    let input: Vec<u64> = lcg(3).take(10_000).collect();
    c.bench_function("std::sort_unstable_10k", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_unstable();
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_random_10k,
    bench_sorted_2k,
    bench_std_sort_unstable_10k
);
criterion_main!(benches);
