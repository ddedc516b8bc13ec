//! Deterministic random number generation.
//!
//! The engine itself is fully deterministic; the only randomness in a match
//! is the AI's targeting perturbation, and all of it flows through `GameRng`.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each AI opponent gets an independent branch
//! - **Serializable**: O(1) state capture for session snapshots
//!
//! ```
//! use strike_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork an independent stream for one opponent
//! let mut ai_rng = rng.fork();
//!
//! // Forks are deterministic: the same parent seed and fork order
//! // always yields the same stream.
//! let mut rng2 = GameRng::new(42);
//! let mut ai_rng2 = rng2.fork();
//! assert_eq!(ai_rng.gen_range_f64(0.0..0.2), ai_rng2.gen_range_f64(0.0..0.2));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with forking for per-opponent streams.
///
/// Uses ChaCha8 for speed while keeping a reproducible, serializable stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
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
    /// Each fork produces a different but deterministic sequence. The match
    /// controller forks one stream per AI opponent so that opponents draw
    /// independently of each other and of setup order.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a uniform float in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a uniform float in the given half-open range.
    pub fn gen_range_f64(&mut self, range: std::ops::Range<f64>) -> f64 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for session snapshots.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
