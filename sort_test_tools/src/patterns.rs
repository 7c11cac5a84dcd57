//! Deterministic input generators for sort tests and benchmarks.
//!
//! All random generators draw from an rng derived from [`seed`], so a failing run can be replayed
//! by exporting `OVERRIDE_SEED=<seed>`.

use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use rand::distributions::Uniform;
use rand::prelude::*;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// The seed shared by every random generator in this process.
pub fn seed() -> u64 {
    *SEED
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(seed())
}

/// Uniformly random values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly random values drawn from `range`, a small range yields many duplicates.
pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let dist = Uniform::from(range);
    rng().sample_iter(dist).take(len).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len).map(|i| i as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    v.reverse();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mid = len / 2;
    let mut v = random(len);

    v[..mid].sort_unstable();
    v[mid..].sort_unstable_by(|a, b| b.cmp(a));
    v
}

/// Random values split into `run_count` runs, each sorted in a random direction.
pub fn runs(len: usize, run_count: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let run_len = (len / run_count.max(1)).max(1);
    let mut rng = StdRng::seed_from_u64(seed().wrapping_add(1));

    for run in v.chunks_mut(run_len) {
        if rng.gen_bool(0.5) {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}
