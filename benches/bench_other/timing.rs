use std::time::{Duration, Instant};

use criterion::black_box;

use rand::prelude::*;

use partition_comp::large_element::{self, LargeElement};
use partition_comp::partition::{cyclic, hoare};
use partition_comp::{patterns, Partition};

use super::util::{cpu_max_freq_hz, env_usize};

const INT_MIN_VALUE: i32 = 0;
const INT_MAX_VALUE: i32 = 50_000_000;

// Width of the large element used for the copy cost runs, 256 bytes.
const LARGE_ELEMENT_LEN: usize = 64;

/// Partitions `buffer` `runs` times by `pred` and returns the summed duration of the partition
/// calls.
///
/// Between runs the buffer is rotated by a random offset, so consecutive calls don't see the
/// exact same memory layout. The rotation is not timed. Every boundary is added to `sink`, which
/// keeps the optimizer from dropping the calls.
pub fn run_partitioning<T, P, F>(
    buffer: &mut [T],
    mut pred: F,
    runs: usize,
    sink: &mut u64,
    rng: &mut StdRng,
) -> Duration
where
    P: Partition,
    F: FnMut(&T) -> bool,
{
    let len = buffer.len();
    let mut overall_duration = Duration::ZERO;

    for _ in 0..runs {
        let start = Instant::now();
        let boundary = <P as Partition>::partition_by(black_box(&mut *buffer), &mut pred);
        overall_duration += start.elapsed();

        *sink = sink.wrapping_add(black_box(boundary) as u64);

        if len > 0 {
            let offset = rng.gen_range(0..len);
            buffer.rotate_left(offset);
        }
    }

    let total_elems = (len * runs) as f64;
    if let Some(max_freq_hz) = cpu_max_freq_hz() {
        let cycles = overall_duration.as_secs_f64() * max_freq_hz;
        println!(
            "{} ms ({:.2} elem/cycle)",
            overall_duration.as_millis(),
            total_elems / cycles
        );
    } else {
        println!("{} ms", overall_duration.as_millis());
    }

    overall_duration
}

fn run_int_split<P: Partition>(
    len: usize,
    pivot: i32,
    runs: usize,
    sink: &mut u64,
    rng: &mut StdRng,
) {
    print!("\t\t {} : ", <P as Partition>::name());

    let mut buffer = patterns::random_sequence(len, INT_MIN_VALUE, INT_MAX_VALUE, rng);
    run_partitioning::<i32, P, _>(&mut buffer, |elem| *elem < pivot, runs, sink, rng);
}

fn run_large_element_split<P: Partition>(
    len: usize,
    left_ratio: f64,
    runs: usize,
    sink: &mut u64,
    rng: &mut StdRng,
) {
    print!("\t\t {} : ", <P as Partition>::name());

    let mut buffer = large_element::random_large_elements::<LARGE_ELEMENT_LEN, _>(len, rng);
    let pivot = large_element::pivot_large_element::<LARGE_ELEMENT_LEN, _>(left_ratio, rng);
    run_partitioning::<LargeElement<LARGE_ELEMENT_LEN>, P, _>(
        &mut buffer,
        |elem| *elem < pivot,
        runs,
        sink,
        rng,
    );
}

/// Times both implementations on integers and on large elements, for a 1:1 and a 1:3 split.
///
/// Sizes come from `PARTITION_TIMING_LEN` and `PARTITION_TIMING_RUNS`.
pub fn run_timing_suite() {
    let len = env_usize("PARTITION_TIMING_LEN", 10_000_000);
    let runs = env_usize("PARTITION_TIMING_RUNS", 100);

    let mut rng = patterns::new_seed();
    let mut sink = 0u64;

    println!("partitioning on arrays of integers, len: {len}, runs: {runs}");
    for (split_name, left_ratio) in [("1:1", 0.5), ("1:3", 0.25)] {
        println!("\t left/right lengths ratio (after partitioning) - {split_name}");

        let pivot = (INT_MIN_VALUE as f64 * (1.0 - left_ratio)
            + INT_MAX_VALUE as f64 * left_ratio) as i32;
        run_int_split::<hoare::PartitionImpl>(len, pivot, runs, &mut sink, &mut rng);
        run_int_split::<cyclic::PartitionImpl>(len, pivot, runs, &mut sink, &mut rng);
    }

    // Same amount of memory as the integer runs.
    let large_len = len / LARGE_ELEMENT_LEN;
    println!("partitioning on arrays of large elements ({LARGE_ELEMENT_LEN} x i32), len: {large_len}, runs: {runs}");
    for (split_name, left_ratio) in [("1:1", 0.5), ("1:3", 0.25)] {
        println!("\t left/right lengths ratio (after partitioning) - {split_name}");

        run_large_element_split::<hoare::PartitionImpl>(
            large_len, left_ratio, runs, &mut sink, &mut rng,
        );
        run_large_element_split::<cyclic::PartitionImpl>(
            large_len, left_ratio, runs, &mut sink, &mut rng,
        );
    }

    println!("Final value of the sink (to prevent compiler optimizations): {sink}");
}
