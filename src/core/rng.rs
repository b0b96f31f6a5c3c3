//! Deterministic random number generation.
//!
//! A game's randomness is one seed. Each purpose gets its own stream
//! derived from that seed with [`GameRng::for_context`], so the deck shuffle
//! and the seating shuffle never share draws. The derivation is a fixed mix
//! of the seed and the context name, so a recorded seed deals the same game
//! on every platform and toolchain.
//!
//! Non-determinism only enters through [`GameRng::entropy_seed`], which the
//! game factory calls when no seed is supplied.
//!
//! ```
//! use hanabi_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut deck_rng = rng.for_context("deck");
//! let mut seat_rng = rng.for_context("seating");
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! deck_rng.shuffle(&mut a);
//! seat_rng.shuffle(&mut b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive a fresh seed from the clock mixed with OS randomness.
    ///
    /// This is the only non-deterministic entry point of the crate.
    #[must_use]
    pub fn entropy_seed() -> u64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        nanos ^ rand::thread_rng().gen::<u64>()
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a named context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// FNV-1a over the context name, folded into the seed with splitmix64.
fn context_seed(seed: u64, context: &str) -> u64 {
    let salt = context.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    });

    let mut z = (seed ^ salt).wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
