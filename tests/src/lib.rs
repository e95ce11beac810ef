//! Shared helpers for the ccrypt cross-crate test suites

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic CSPRNG for reproducible key generation in tests.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
