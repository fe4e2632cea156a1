//! PCG32 streams for text generation.
//!
//! Word and name selection uses PCG32 rather than the shared Mulberry32
//! stream: text draws are keyed by the item seed alone, so they stay
//! reproducible no matter how far the page stream has advanced.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves before seeding.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = u64::from(seed) | (u64::from(seed) << 32);
    Pcg32::seed_from_u64(seed64)
}
