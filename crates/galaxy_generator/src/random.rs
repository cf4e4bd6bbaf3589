use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of independent uniform samples in `[0, 1)`.
///
/// Every [`RngCore`] is a source; each sample consumes exactly one `u32` from
/// the underlying generator.
pub trait UniformSource {
    fn uniform(&mut self) -> f32;
}

impl<R: RngCore> UniformSource for R {
    #[inline]
    fn uniform(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Deterministic generator used for reproducible clouds.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from the operating system, for production runs.
pub fn process_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_os_rng()
}
