//! Curve generation: walks the time grid and samples both signal models.

use crate::config::ScenarioConfig;
use crate::signal::{BaselineModel, NoiseSeed, OptimizedPower, PowerModel};
use crate::sim::types::{CurveSet, SimParams, TimeGrid};

/// Generates the optimizer-off and optimizer-on curves for one scenario.
///
/// Holds the timing parameters and both signal models; [`run`](Self::run)
/// walks the grid once, in order, so noisy models see a well-defined noise
/// sequence. Each invocation re-evaluates everything from its inputs; no
/// state survives between runs beyond the RNG position.
pub struct SignalGenerator {
    params: SimParams,
    optimized: OptimizedPower,
    baseline: BaselineModel,
}

impl SignalGenerator {
    /// Creates a generator from explicit parts.
    pub fn new(params: SimParams, optimized: OptimizedPower, baseline: BaselineModel) -> Self {
        Self {
            params,
            optimized,
            baseline,
        }
    }

    /// Builds the generator described by a scenario configuration.
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let params = SimParams::new(
            cfg.simulation.duration_min,
            cfg.simulation.prediction_min,
            cfg.simulation.samples_per_min,
        );
        let optimized = OptimizedPower::from_config(&cfg.signal);
        let baseline = BaselineModel::from_config(&cfg.signal, NoiseSeed::from(cfg.simulation.seed));
        Self::new(params, optimized, baseline)
    }

    /// Timing parameters this generator was built with.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Generates both curves over the full grid.
    pub fn run(&mut self) -> CurveSet {
        let grid = TimeGrid::from_params(&self.params);
        let mut baseline_mw = Vec::with_capacity(grid.len());
        let mut optimized_mw = Vec::with_capacity(grid.len());

        for &t in grid.values() {
            optimized_mw.push(self.optimized.power_mw(t));
            baseline_mw.push(self.baseline.power_mw(t));
        }

        let live_end = self.params.live_end();
        CurveSet::new(grid, baseline_mw, optimized_mw, live_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: Option<u64>) -> SignalGenerator {
        let mut cfg = ScenarioConfig::demo();
        cfg.simulation.seed = seed;
        SignalGenerator::from_config(&cfg)
    }

    #[test]
    fn curves_cover_the_whole_grid() {
        let mut g = generator(Some(0));
        assert_eq!(g.params().total_samples(), 140);
        let set = g.run();
        // (30 + 5) minutes at 4 samples/min
        assert_eq!(set.len(), 140);
        assert_eq!(set.baseline_mw.len(), 140);
        assert_eq!(set.optimized_mw.len(), 140);
        assert_eq!(set.live_end, 120);
    }

    #[test]
    fn fixed_seed_is_bit_for_bit_reproducible() {
        let a = generator(Some(0)).run();
        let b = generator(Some(0)).run();
        assert_eq!(a.baseline_mw, b.baseline_mw);
        assert_eq!(a.optimized_mw, b.optimized_mw);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generator(Some(0)).run();
        let b = generator(Some(1)).run();
        assert_ne!(a.baseline_mw, b.baseline_mw);
        // the optimizer-on curve carries no noise
        assert_eq!(a.optimized_mw, b.optimized_mw);
    }

    #[test]
    fn curves_stay_near_nominal_power() {
        let set = generator(Some(0)).run();
        for (&b, &o) in set.baseline_mw.iter().zip(&set.optimized_mw) {
            assert!((80.0..=100.0).contains(&b), "baseline out of band: {b}");
            assert!((89.0..=93.0).contains(&o), "optimized out of band: {o}");
        }
    }

    #[test]
    fn smooth_model_needs_no_seed() {
        let mut cfg = ScenarioConfig::demo();
        cfg.signal.model = "smooth".to_string();
        cfg.simulation.seed = None;
        let a = SignalGenerator::from_config(&cfg).run();
        let b = SignalGenerator::from_config(&cfg).run();
        // noise-free model is reproducible even in live mode
        assert_eq!(a.baseline_mw, b.baseline_mw);
    }
}
