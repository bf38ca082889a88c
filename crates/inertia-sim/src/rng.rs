//! Seeded generators for reproducible runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Portable generator: the same seed yields the same draws on every platform.
pub type SeededRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> SeededRng {
    ChaCha8Rng::seed_from_u64(seed)
}
