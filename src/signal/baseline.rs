//! Optimizer-off power curve models.
//!
//! Three model variants are selected by the `signal.model` config string:
//! `"corrected"` anchors the baseline to the optimizer-on curve so it stays
//! above it on average, `"independent"` synthesizes a free-running noisy
//! sinusoid, and `"smooth"` is the noise-free display variant.

use rand::rngs::StdRng;

use crate::config::SignalConfig;
use crate::signal::optimized::OptimizedPower;
use crate::signal::types::{NoiseSeed, PowerModel, gaussian_noise};

/// Baseline anchored to the optimizer-on curve.
///
/// Power is the optimizer-on sample plus a fixed offset, a secondary ripple,
/// and Gaussian noise. The fixed offset keeps the baseline above the
/// optimized curve on average; the noise can still dip it below at single
/// samples, which the savings analysis clips to zero.
#[derive(Debug, Clone)]
pub struct CorrectedBaseline {
    /// Optimizer-on curve the baseline is anchored to.
    anchor: OptimizedPower,

    /// Fixed offset above the optimizer-on curve (MW).
    pub offset_mw: f32,

    /// Secondary ripple amplitude (MW).
    pub ripple_amp_mw: f32,

    /// Secondary ripple angular frequency (rad/min).
    pub ripple_omega: f32,

    /// Gaussian noise standard deviation (MW).
    pub noise_std: f32,

    /// Random number generator for noise generation.
    rng: StdRng,
}

impl CorrectedBaseline {
    /// Creates a corrected baseline around the given optimizer-on curve.
    pub fn new(
        anchor: OptimizedPower,
        offset_mw: f32,
        ripple_amp_mw: f32,
        ripple_omega: f32,
        noise_std: f32,
        seed: NoiseSeed,
    ) -> Self {
        Self {
            anchor,
            offset_mw,
            ripple_amp_mw,
            ripple_omega,
            noise_std: noise_std.max(0.0),
            rng: seed.rng(),
        }
    }
}

impl PowerModel for CorrectedBaseline {
    fn power_mw(&mut self, t_min: f32) -> f32 {
        let ripple = self.ripple_amp_mw * (self.ripple_omega * t_min).sin();
        self.anchor.sample(t_min) + self.offset_mw + ripple + gaussian_noise(&mut self.rng, self.noise_std)
    }

    fn model_name(&self) -> &'static str {
        "CorrectedBaseline"
    }
}

/// Free-running baseline: its own sinusoid plus Gaussian noise, not anchored
/// to the optimizer-on curve. Makes no ordering promise against it.
#[derive(Debug, Clone)]
pub struct IndependentBaseline {
    /// Nominal operating power (MW).
    pub center_mw: f32,

    /// Sinusoid amplitude (MW).
    pub amp_mw: f32,

    /// Angular frequency (rad/min).
    pub omega: f32,

    /// Gaussian noise standard deviation (MW).
    pub noise_std: f32,

    /// Random number generator for noise generation.
    rng: StdRng,
}

impl IndependentBaseline {
    /// Creates a free-running baseline with the specified parameters.
    pub fn new(center_mw: f32, amp_mw: f32, omega: f32, noise_std: f32, seed: NoiseSeed) -> Self {
        Self {
            center_mw,
            amp_mw,
            omega,
            noise_std: noise_std.max(0.0),
            rng: seed.rng(),
        }
    }
}

impl PowerModel for IndependentBaseline {
    fn power_mw(&mut self, t_min: f32) -> f32 {
        self.center_mw
            + self.amp_mw * (self.omega * t_min).sin()
            + gaussian_noise(&mut self.rng, self.noise_std)
    }

    fn model_name(&self) -> &'static str {
        "IndependentBaseline"
    }
}

/// Noise-free display baseline: a wider sinusoid around the nominal power.
#[derive(Debug, Clone)]
pub struct SmoothBaseline {
    /// Nominal operating power (MW).
    pub center_mw: f32,

    /// Sinusoid amplitude (MW).
    pub amp_mw: f32,

    /// Angular frequency (rad/min).
    pub omega: f32,
}

impl SmoothBaseline {
    /// Creates a noise-free baseline with the specified parameters.
    pub fn new(center_mw: f32, amp_mw: f32, omega: f32) -> Self {
        Self {
            center_mw,
            amp_mw,
            omega,
        }
    }
}

impl PowerModel for SmoothBaseline {
    fn power_mw(&mut self, t_min: f32) -> f32 {
        self.center_mw + self.amp_mw * (self.omega * t_min).sin()
    }

    fn model_name(&self) -> &'static str {
        "SmoothBaseline"
    }
}

/// Optimizer-off model selected by the `signal.model` config string.
#[derive(Debug, Clone)]
pub enum BaselineModel {
    /// Anchored to the optimizer-on curve (`"corrected"`).
    Corrected(CorrectedBaseline),
    /// Free-running noisy sinusoid (`"independent"`).
    Independent(IndependentBaseline),
    /// Noise-free display variant (`"smooth"`).
    Smooth(SmoothBaseline),
}

impl BaselineModel {
    /// Builds the configured baseline model.
    ///
    /// Unknown model strings fall back to `"corrected"`; [`crate::config::ScenarioConfig::validate`]
    /// rejects them before a run gets here.
    pub fn from_config(cfg: &SignalConfig, seed: NoiseSeed) -> Self {
        match cfg.model.as_str() {
            "independent" => BaselineModel::Independent(IndependentBaseline::new(
                cfg.center_mw,
                cfg.base_amp_mw,
                cfg.omega,
                cfg.base_noise_std,
                seed,
            )),
            "smooth" => BaselineModel::Smooth(SmoothBaseline::new(
                cfg.center_mw,
                cfg.base_amp_mw,
                cfg.omega,
            )),
            _ => BaselineModel::Corrected(CorrectedBaseline::new(
                OptimizedPower::from_config(cfg),
                cfg.offset_mw,
                cfg.ripple_amp_mw,
                cfg.ripple_omega,
                cfg.noise_std,
                seed,
            )),
        }
    }
}

impl PowerModel for BaselineModel {
    fn power_mw(&mut self, t_min: f32) -> f32 {
        match self {
            BaselineModel::Corrected(m) => m.power_mw(t_min),
            BaselineModel::Independent(m) => m.power_mw(t_min),
            BaselineModel::Smooth(m) => m.power_mw(t_min),
        }
    }

    fn model_name(&self) -> &'static str {
        match self {
            BaselineModel::Corrected(m) => m.model_name(),
            BaselineModel::Independent(m) => m.model_name(),
            BaselineModel::Smooth(m) => m.model_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> OptimizedPower {
        OptimizedPower::new(91.0, 1.5, 0.25, 0.5)
    }

    #[test]
    fn corrected_sits_above_anchor_without_noise() {
        let mut base = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, 0.0, NoiseSeed::Fixed(0));
        let opt = anchor();
        for i in 0..120 {
            let t = i as f32 * 0.25;
            // offset 1.5 dominates the +/-0.8 ripple
            assert!(base.power_mw(t) > opt.sample(t));
        }
    }

    #[test]
    fn corrected_noise_can_dip_below_anchor() {
        let mut base = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, 0.8, NoiseSeed::Fixed(0));
        let opt = anchor();
        let mut dips = 0;
        for i in 0..2000 {
            let t = i as f32 * 0.25;
            if base.power_mw(t) < opt.sample(t) {
                dips += 1;
            }
        }
        assert!(dips > 0, "sigma 0.8 against a ~0.7 MW margin should dip");
    }

    #[test]
    fn deterministic_with_same_seed() {
        let mut a = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, 0.8, NoiseSeed::Fixed(42));
        let mut b = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, 0.8, NoiseSeed::Fixed(42));
        for i in 0..120 {
            let t = i as f32 * 0.25;
            assert_eq!(a.power_mw(t), b.power_mw(t));
        }
    }

    #[test]
    fn different_seeds_produce_different_results() {
        let mut a = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, 0.8, NoiseSeed::Fixed(42));
        let mut b = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, 0.8, NoiseSeed::Fixed(43));
        let mut all_same = true;
        for i in 0..120 {
            let t = i as f32 * 0.25;
            if (a.power_mw(t) - b.power_mw(t)).abs() > 1e-5 {
                all_same = false;
                break;
            }
        }
        assert!(!all_same);
    }

    #[test]
    fn negative_noise_std_clamped_to_zero() {
        let base = CorrectedBaseline::new(anchor(), 1.5, 0.8, 0.35, -0.5, NoiseSeed::Fixed(0));
        assert_eq!(base.noise_std, 0.0);
    }

    #[test]
    fn smooth_is_noise_free() {
        let mut a = SmoothBaseline::new(90.0, 5.0, 0.3);
        let mut b = SmoothBaseline::new(90.0, 5.0, 0.3);
        for i in 0..120 {
            let t = i as f32 * 0.25;
            assert_eq!(a.power_mw(t), b.power_mw(t));
        }
    }

    #[test]
    fn model_selection_by_config_string() {
        let mut cfg = SignalConfig::default();
        let m = BaselineModel::from_config(&cfg, NoiseSeed::Fixed(0));
        assert_eq!(m.model_name(), "CorrectedBaseline");

        cfg.model = "independent".to_string();
        let m = BaselineModel::from_config(&cfg, NoiseSeed::Fixed(0));
        assert_eq!(m.model_name(), "IndependentBaseline");

        cfg.model = "smooth".to_string();
        let m = BaselineModel::from_config(&cfg, NoiseSeed::Fixed(0));
        assert_eq!(m.model_name(), "SmoothBaseline");
    }
}
