//! Seedable random stream threaded through every sampling call

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random stream owned by a particle manager.
///
/// Every draw goes through this handle so a fixed seed reproduces a run
/// exactly; there is no global generator.
pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.inner.random::<f32>()
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// `base ± deviation`, symmetric around `base`
    pub fn variance(&mut self, base: f32, deviation: f32) -> f32 {
        base + deviation * (self.next_f32() * 2.0 - 1.0)
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }
}
