use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::Move;

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 20;
/// Longest scramble accepted from user input.
pub const MAX_SCRAMBLE_LENGTH: u32 = 10_000;

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of moves in the scramble.
    pub length: u32,
    /// Random seed. The same seed and length always produce the same moves.
    pub seed: String,
}

impl ScrambleParams {
    /// Generates new scramble parameters with a random seed.
    pub fn new(length: u32) -> Self {
        Self::with_seed(length, rand::rng().random::<u64>().to_string())
    }

    /// Constructs scramble parameters from a known seed.
    pub fn with_seed(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    /// Returns the random number generator seeded from these parameters.
    ///
    /// **Changing this will change every seeded scramble.**
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest[..32]);
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Returns the scramble sequence for these parameters.
    pub fn moves(&self) -> Vec<Move> {
        random_moves(&mut self.rng(), self.length)
    }
}

/// Returns `count` moves chosen independently and uniformly from
/// [`Move::SCRAMBLE`].
pub fn random_moves(rng: &mut impl Rng, count: u32) -> Vec<Move> {
    std::iter::from_fn(|| Move::SCRAMBLE.choose(&mut *rng).copied())
        .take(count as usize)
        .collect()
}
