//! Random source capability.
//!
//! Plans and operators draw all their randomness through [`RandomSource`].
//! Every `rand::Rng` implements it, so callers pass a generator per call
//! (typically a seeded `SmallRng` owned by one worker thread) instead of
//! sharing a process-wide instance.

use rand::Rng;

/// Uniform draws used by plan primitives and mutation operators.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[lo, hi)`.
    ///
    /// # Panics
    /// Panics if `lo >= hi`.
    fn next_index(&mut self, lo: usize, hi: usize) -> usize;

    /// Picks one element uniformly. `None` if `items` is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.next_index(0, items.len())])
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_index(&mut self, lo: usize, hi: usize) -> usize {
        self.random_range(lo..hi)
    }
}
