use std::cmp::Ordering;

use rand::prelude::*;

use crate::patterns;

/// Range of the values stored in a [`LargeElement`].
pub const LARGE_ELEMENT_MIN_VALUE: i32 = 0;
pub const LARGE_ELEMENT_MAX_VALUE: i32 = 9_999;

/// Wide stack value keyed by its first entry.
///
/// Equality and ordering only look at `values[0]`, the rest is payload that has to be moved along
/// with the key. This models records that are expensive to copy but cheap to compare. `L` must be
/// at least 1, `LargeElement<0>` is rejected at compile time once it is constructed.
#[derive(Debug, Clone, Copy)]
pub struct LargeElement<const L: usize> {
    values: [i32; L],
}

impl<const L: usize> LargeElement<L> {
    const HAS_KEY: () = assert!(L > 0, "LargeElement needs at least one value, the key");

    /// Key `key`, payload derived from the key so it can be checked after moving.
    pub fn new(key: i32) -> Self {
        let () = Self::HAS_KEY;

        let mut values = [0; L];
        let mut val = key;

        for elem in &mut values {
            *elem = val;
            val = std::hint::black_box(val.wrapping_add(1));
        }
        Self { values }
    }

    pub fn from_values(values: [i32; L]) -> Self {
        let () = Self::HAS_KEY;

        Self { values }
    }

    pub fn key(&self) -> i32 {
        self.values[0]
    }

    pub fn values(&self) -> &[i32; L] {
        &self.values
    }
}

impl<const L: usize> PartialEq for LargeElement<L> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<const L: usize> Eq for LargeElement<L> {}

impl<const L: usize> PartialOrd for LargeElement<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> Ord for LargeElement<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Generates `count` large elements, every entry uniformly distributed in
/// `[LARGE_ELEMENT_MIN_VALUE, LARGE_ELEMENT_MAX_VALUE]`.
pub fn random_large_elements<const L: usize, R>(count: usize, rng: &mut R) -> Vec<LargeElement<L>>
where
    R: Rng + ?Sized,
{
    let () = LargeElement::<L>::HAS_KEY;

    let flat =
        patterns::random_sequence(count * L, LARGE_ELEMENT_MIN_VALUE, LARGE_ELEMENT_MAX_VALUE, rng);

    flat.chunks_exact(L)
        .map(|chunk| {
            let mut values = [0; L];
            values.copy_from_slice(chunk);
            LargeElement::from_values(values)
        })
        .collect()
}

/// Generates a pivot, such that partitioning random large elements by `x < pivot` yields roughly
/// `left_ratio` of them on the left side.
///
/// The payload is random, the key is interpolated between the min and max value.
pub fn pivot_large_element<const L: usize, R>(left_ratio: f64, rng: &mut R) -> LargeElement<L>
where
    R: Rng + ?Sized,
{
    assert!(
        (0.0..=1.0).contains(&left_ratio),
        "left_ratio must be in [0.0, 1.0], got: {left_ratio}"
    );

    let mut pivot = random_large_elements::<L, R>(1, rng)[0];
    pivot.values[0] = (LARGE_ELEMENT_MIN_VALUE as f64 * (1.0 - left_ratio)
        + LARGE_ELEMENT_MAX_VALUE as f64 * left_ratio) as i32;

    pivot
}
