//! Mutation capability.

use crate::random::RandomSource;

/// Produces a mutated copy of a solution.
///
/// Implementations never modify `parent`; the returned solution is owned
/// by the caller. Randomness comes only from `rng`, so a seeded generator
/// makes the result reproducible.
pub trait MutationOperator<S> {
    /// Returns a neighbour of `parent`.
    fn mutate<R: RandomSource + ?Sized>(&self, parent: &S, rng: &mut R) -> S;
}
