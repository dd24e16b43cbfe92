//! Deterministic random number generation for trigger rolls.
//!
//! The combat resolver rolls every candidate rule's trigger chance once
//! per hit. The roll source is deterministic and seedable so combat
//! outcomes can be replayed from a recorded seed.
//!
//! ## Usage
//!
//! ```
//! use combat_augments::combat::CombatRng;
//!
//! let mut rng = CombatRng::new(42);
//!
//! // A 100% chance always passes, a 0% chance never does.
//! assert!(rng.percent_roll(100));
//! assert!(!rng.percent_roll(0));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG consumed by trigger-chance evaluation.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
/// Supports forking so subsystems can take an independent stream
/// without disturbing the main combat sequence.
#[derive(Clone, Debug)]
pub struct CombatRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl CombatRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Roll against a whole-percent chance.
    ///
    /// Returns `true` with probability `chance / 100`. A chance of 100
    /// or more always passes; a chance of 0 never does. Callers encode
    /// "unconditional" separately (see `DamageModifier::roll`).
    pub fn percent_roll(&mut self, chance: u8) -> bool {
        self.inner.gen_range(0..100u32) < u32::from(chance)
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}
