use std::cell::Cell;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;

use sort_test_tools::{patterns, Sort};

const LENGTHS: [usize; 10] = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1_024];

/// With `MEASURE_COMP` set, print mean comparison counts instead of timing.
static MEASURE_COMP: Lazy<bool> = Lazy::new(|| env::var("MEASURE_COMP").is_ok());

type PatternFn = fn(usize) -> Vec<i32>;

fn mostly_zero(len: usize) -> Vec<i32> {
    let random_len = len / 20;
    let mut v = vec![0; len - random_len];
    v.extend(patterns::random(random_len));
    v.shuffle(&mut rand::thread_rng());
    v
}

fn eight_runs(len: usize) -> Vec<i32> {
    patterns::runs(len, 8)
}

const PATTERNS: [(&str, PatternFn); 6] = [
    ("random", patterns::random),
    ("ascending", patterns::ascending),
    ("descending", patterns::descending),
    ("pipe_organ", patterns::pipe_organ),
    ("runs", eight_runs),
    ("mostly_zero", mostly_zero),
];

fn mean_comparisons<S: Sort>(pattern: PatternFn, len: usize) -> u64 {
    let rounds = if len <= 64 { 1_000 } else { 20 };
    let comparisons = Cell::new(0u64);

    for _ in 0..rounds {
        let mut v = pattern(len);
        S::sort_by(black_box(v.as_mut_slice()), |a, b| {
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        });
    }

    comparisons.get() / rounds
}

fn bench_strategy<S: Sort>(c: &mut Criterion) {
    let sort_name = S::name();

    for (pattern_name, pattern) in PATTERNS {
        for len in LENGTHS {
            let id = format!("{sort_name}/{pattern_name}/{len}");

            if *MEASURE_COMP {
                println!("{id}: {} comparisons", mean_comparisons::<S>(pattern, len));
                continue;
            }

            c.bench_function(&id, |b| {
                b.iter_batched_ref(
                    || pattern(len),
                    |v| S::sort(black_box(v.as_mut_slice())),
                    BatchSize::SmallInput,
                )
            });
        }
    }
}

macro_rules! strategy_benches {
    ($($module:ident),*) => {
        paste::paste! {
            $(
                fn [<bench_ $module>](c: &mut Criterion) {
                    bench_strategy::<textbook_sort::$module::SortImpl>(c);
                }
            )*

            criterion_group!(benches, $([<bench_ $module>]),*);
        }
    };
}

strategy_benches!(insertion, selection);
criterion_main!(benches);
