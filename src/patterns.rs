//! Provides a set of patterns useful for testing and benchmarking partition algorithms.
//! The shortcut functions produce i32 values and draw from the shared seed, see
//! [`random_init_seed`].

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::distributions::uniform::SampleUniform;
use rand::prelude::*;

use once_cell::sync::OnceCell;

// --- Public ---

/// Generates `count` values uniformly distributed in `[min, max]`, drawn from `rng`.
pub fn random_sequence<T, R>(count: usize, min: T, max: T, rng: &mut R) -> Vec<T>
where
    T: SampleUniform,
    R: Rng + ?Sized,
{
    let dist = rand::distributions::Uniform::new_inclusive(min, max);

    (0..count).map(|_| dist.sample(rng)).collect()
}

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_uniform(size, i32::MIN..=i32::MAX)
}

pub fn random_uniform(size: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::

    let (min, max) = range.into_inner();
    random_sequence(size, min, max, &mut new_seed())
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Returns the value `x` for which `x < value` holds for roughly `left_percent` percent of the
/// values in `range`.
pub fn split_value(range: RangeInclusive<i32>, left_percent: f64) -> i32 {
    assert!(
        (0.0..=100.0).contains(&left_percent),
        "left_percent out of range: {left_percent}"
    );

    let (min, max) = (*range.start() as f64, *range.end() as f64);
    (min + (max - min) * (left_percent / 100.0)).round() as i32
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

/// Rng seeded from [`random_init_seed`], for callers that need more than one pattern call.
pub fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
