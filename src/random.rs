//! Randomness used by the stochastic runners.
//!
//! Simulated annealing needs exactly two things from its random source:
//! a uniform pick among a non-empty candidate list and a uniform draw in
//! `[0, 1)`. [`RandomSource`] captures that contract and is implemented for
//! every [`rand::Rng`], so any seeded generator can be injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random source consumed by [`SaRunner`](crate::sa::SaRunner).
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..len`.
    ///
    /// `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Returns a real drawn uniformly from `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index on an empty candidate list");
        self.random_range(0..len)
    }

    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(a.choose_index(10), b.choose_index(10));
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn test_uniform_in_unit_interval() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u), "draw out of range: {u}");
        }
    }

    #[test]
    fn test_choose_index_in_range() {
        let mut rng = create_rng(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.choose_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s), "every index should be drawn");
    }
}
