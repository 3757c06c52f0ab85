//! Common types and helpers for power signal models.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Trait defining a power signal sampled along the time grid.
///
/// Models are walked once, in grid order; noisy models advance their RNG on
/// every call, so sampling out of order changes the noise sequence.
pub trait PowerModel {
    /// Returns the power value (MW) at the given time in minutes.
    fn power_mw(&mut self, t_min: f32) -> f32;

    /// Returns a human-readable name for the model.
    fn model_name(&self) -> &'static str;
}

/// Noise source selection: reproducible (seeded) or live (OS entropy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseSeed {
    /// Deterministic: identical parameters produce bit-identical curves.
    Fixed(u64),
    /// Non-reproducible live values.
    Live,
}

impl NoiseSeed {
    /// Builds the RNG for this source.
    pub fn rng(self) -> StdRng {
        match self {
            NoiseSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
            NoiseSeed::Live => StdRng::from_os_rng(),
        }
    }
}

impl From<Option<u64>> for NoiseSeed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(NoiseSeed::Live, NoiseSeed::Fixed)
    }
}

/// Utility function to generate Gaussian noise using Box-Muller transform.
///
/// # Arguments
///
/// * `rng` - Random number generator
/// * `std_dev` - Standard deviation of the noise
///
/// # Returns
///
/// Random value from a Gaussian distribution with mean 0 and specified
/// standard deviation.
pub fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
    z0 * std_dev
}
