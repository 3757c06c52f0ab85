use crate::config::SignalConfig;
use crate::signal::types::PowerModel;

/// Optimizer-on power curve: a smooth periodic signal around the nominal
/// operating power.
///
/// `OptimizedPower` models electrode power under optimization control as
/// `center + amp * sin(omega * t + phase)`; the controller damps the large
/// swings of the uncontrolled furnace down to a small, regular oscillation.
///
/// # Examples
///
/// ```
/// use eaf_sim::signal::optimized::OptimizedPower;
/// use eaf_sim::signal::types::PowerModel;
///
/// let mut model = OptimizedPower::new(
///     91.0, // center_mw - nominal operating power
///     1.5,  // amp_mw - residual oscillation
///     0.25, // omega - rad/min
///     0.5,  // phase_rad
/// );
///
/// let mw = model.power_mw(0.0);
/// assert!(mw > 89.0 && mw < 93.0);
/// ```
#[derive(Debug, Clone)]
pub struct OptimizedPower {
    /// Nominal operating power in megawatts.
    pub center_mw: f32,

    /// Amplitude of the residual oscillation in megawatts.
    pub amp_mw: f32,

    /// Angular frequency in radians per minute.
    pub omega: f32,

    /// Phase offset in radians.
    pub phase_rad: f32,
}

impl OptimizedPower {
    /// Creates a new optimizer-on model with the specified parameters.
    pub fn new(center_mw: f32, amp_mw: f32, omega: f32, phase_rad: f32) -> Self {
        Self {
            center_mw,
            amp_mw,
            omega,
            phase_rad,
        }
    }

    /// Builds the model from a scenario signal section.
    pub fn from_config(cfg: &SignalConfig) -> Self {
        Self::new(cfg.center_mw, cfg.amp_mw, cfg.omega, cfg.phase_rad)
    }

    /// Samples the curve at `t_min` without requiring mutable access.
    ///
    /// The optimizer-on signal is noise-free, so the baseline models that
    /// anchor to it can share a sample without advancing any RNG.
    pub fn sample(&self, t_min: f32) -> f32 {
        self.center_mw + self.amp_mw * (self.omega * t_min + self.phase_rad).sin()
    }
}

impl PowerModel for OptimizedPower {
    fn power_mw(&mut self, t_min: f32) -> f32 {
        self.sample(t_min)
    }

    fn model_name(&self) -> &'static str {
        "OptimizedPower"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillates_around_center() {
        let model = OptimizedPower::new(91.0, 1.5, 0.25, 0.5);
        for i in 0..200 {
            let t = i as f32 * 0.25;
            let mw = model.sample(t);
            assert!(mw >= 89.5 && mw <= 92.5, "out of envelope at t={t}: {mw}");
        }
    }

    #[test]
    fn zero_amplitude_is_flat() {
        let model = OptimizedPower::new(90.0, 0.0, 0.25, 0.5);
        assert_eq!(model.sample(0.0), 90.0);
        assert_eq!(model.sample(17.3), 90.0);
    }

    #[test]
    fn sample_matches_trait_call() {
        let mut model = OptimizedPower::new(91.0, 1.5, 0.25, 0.5);
        let fixed = model.sample(4.0);
        assert_eq!(model.power_mw(4.0), fixed);
    }

    #[test]
    fn phase_shifts_the_curve() {
        let a = OptimizedPower::new(91.0, 1.5, 0.25, 0.0);
        let b = OptimizedPower::new(91.0, 1.5, 0.25, 0.5);
        assert!((a.sample(2.0) - b.sample(0.0)).abs() < 1e-6);
    }
}
