//! Random multisets for benchmarks and property tests.

use rand::{seq::SliceRandom, Rng};
use rand_distr::{Bernoulli, Distribution};

/// A sequence of `n` values where each position repeats the previous value
/// with probability `duplicate_chance`, and is fresh otherwise. Useful for
/// stressing the enumerator with controlled amounts of duplication.
///
/// # Panics
///
/// Panics if `duplicate_chance` is not in `0.0..=1.0`.
pub fn duplicated<R: Rng>(rng: &mut R, n: usize, duplicate_chance: f64) -> Vec<u32> {
    let d = Bernoulli::new(duplicate_chance).unwrap();
    let mut out: Vec<u32> = Vec::with_capacity(n);
    for i in 0..n {
        if i > 0 && d.sample(rng) {
            out.push(out[i - 1]);
        } else {
            out.push(i as u32);
        }
    }
    out
}

/// The values `0..n` in uniformly random order.
pub fn shuffled_range<R: Rng>(rng: &mut R, n: usize) -> Vec<u32> {
    let mut out: Vec<u32> = (0..n as u32).collect();
    out.shuffle(rng);
    out
}
