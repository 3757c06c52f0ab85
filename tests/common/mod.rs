//! Shared test fixtures for integration tests.

use eaf_sim::config::ScenarioConfig;

/// Demo scenario with a specific seed.
pub fn seeded_config(seed: u64) -> ScenarioConfig {
    let mut cfg = ScenarioConfig::demo();
    cfg.simulation.seed = Some(seed);
    cfg
}

/// Demo scenario without a prediction horizon: 30 minutes at 4 samples/min.
pub fn live_only_config() -> ScenarioConfig {
    let mut cfg = ScenarioConfig::demo();
    cfg.simulation.prediction_min = 0;
    cfg
}
