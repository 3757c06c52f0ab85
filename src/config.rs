//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the demo scenario. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::demo`] for the
/// built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation horizon and sampling parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Power signal model parameters.
    #[serde(default)]
    pub signal: SignalConfig,
    /// Furnace operating parameters.
    #[serde(default)]
    pub furnace: FurnaceConfig,
    /// Price and investment inputs.
    #[serde(default)]
    pub prices: PriceConfig,
    /// Zone detection parameters.
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// Simulation horizon and sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Live simulation window (minutes, must be > 0).
    pub duration_min: usize,
    /// Prediction horizon appended after the live window (minutes).
    pub prediction_min: usize,
    /// Samples per simulated minute (must be > 0).
    pub samples_per_min: usize,
    /// Noise seed. `None` draws from OS entropy (non-reproducible live mode).
    pub seed: Option<u64>,
    /// Analysis window: `"combined"`, `"split"`, or `"forecast"`.
    pub view: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_min: 30,
            prediction_min: 5,
            samples_per_min: 4,
            seed: Some(0),
            view: "combined".to_string(),
        }
    }
}

/// Power signal model parameters.
///
/// The optimizer-on curve is `center + amp * sin(omega * t + phase)`. How the
/// optimizer-off curve is built depends on `model`:
/// `"corrected"` anchors it to the optimizer-on curve plus a fixed offset,
/// a secondary ripple, and Gaussian noise; `"independent"` gives it its own
/// sinusoid and noise; `"smooth"` is the noise-free display variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignalConfig {
    /// Baseline model: `"corrected"`, `"independent"`, or `"smooth"`.
    pub model: String,
    /// Nominal operating power (MW).
    pub center_mw: f32,
    /// Optimizer-on sinusoid amplitude (MW).
    pub amp_mw: f32,
    /// Angular frequency (rad/min).
    pub omega: f32,
    /// Optimizer-on phase offset (radians).
    pub phase_rad: f32,
    /// Fixed offset of the optimizer-off curve above optimizer-on (MW, corrected model).
    pub offset_mw: f32,
    /// Secondary ripple amplitude (MW, corrected model).
    pub ripple_amp_mw: f32,
    /// Secondary ripple angular frequency (rad/min, corrected model).
    pub ripple_omega: f32,
    /// Gaussian noise standard deviation (MW, corrected model).
    pub noise_std: f32,
    /// Optimizer-off sinusoid amplitude (MW, independent and smooth models).
    pub base_amp_mw: f32,
    /// Gaussian noise standard deviation (MW, independent model).
    pub base_noise_std: f32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            model: "corrected".to_string(),
            center_mw: 91.0,
            amp_mw: 1.5,
            omega: 0.25,
            phase_rad: 0.5,
            offset_mw: 1.5,
            ripple_amp_mw: 0.8,
            ripple_omega: 0.35,
            noise_std: 0.8,
            base_amp_mw: 2.5,
            base_noise_std: 0.5,
        }
    }
}

/// Furnace operating parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FurnaceConfig {
    /// Tap weight per heat (tons, must be > 0).
    pub tap_weight_tons: f32,
    /// Heats per working day (must be > 0).
    pub heats_per_day: u32,
    /// Working days per month (1–31).
    pub days_per_month: u32,
    /// Baseline specific energy consumption (kWh/ton, must be > 0).
    pub energy_baseline_kwh_per_ton: f32,
    /// Operator-expected saving percentage. When absent, the percentage
    /// measured from the curves feeds the financial projection.
    pub expected_saving_pct: Option<f32>,
    /// Hot heel left between heats (tons).
    pub hot_heel_tons: f32,
    /// Number of oxy-fuel burners.
    pub burners: u32,
    /// Natural gas usage (m³/ton).
    pub nat_gas_m3_per_ton: f32,
    /// Injected carbon (kg/ton).
    pub carbon_kg_per_ton: f32,
    /// Charged lime (kg/ton).
    pub lime_kg_per_ton: f32,
    /// Charged dolomite (kg/ton).
    pub dolomite_kg_per_ton: f32,
    /// Current power-on time per heat (minutes).
    pub power_on_time_min: f32,
}

impl Default for FurnaceConfig {
    fn default() -> Self {
        Self {
            tap_weight_tons: 145.0,
            heats_per_day: 8,
            days_per_month: 26,
            energy_baseline_kwh_per_ton: 296.0,
            expected_saving_pct: None,
            hot_heel_tons: 15.0,
            burners: 7,
            nat_gas_m3_per_ton: 8.0,
            carbon_kg_per_ton: 13.0,
            lime_kg_per_ton: 52.5,
            dolomite_kg_per_ton: 7.0,
            power_on_time_min: 32.0,
        }
    }
}

/// Price and investment inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriceConfig {
    /// Electricity price (currency/kWh).
    pub electricity_price_kwh: f32,
    /// Scrap price (currency/ton). Carried in the scenario but not used by
    /// the ROI projection.
    pub scrap_price_ton: f32,
    /// Software investment cost (currency).
    pub software_cost: f32,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            electricity_price_kwh: 0.10,
            scrap_price_ton: 410.0,
            software_cost: 200_000.0,
        }
    }
}

/// Zone detection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectionConfig {
    /// Minimum run length; only runs strictly longer than this are reported.
    pub min_run_len: usize,
    /// Deviation threshold for anomaly zones over the live window (MW).
    pub deviation_threshold_mw: f32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_run_len: 5,
            deviation_threshold_mw: 2.5,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.duration_min"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the demo scenario: corrected model, combined analysis window.
    pub fn demo() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            signal: SignalConfig::default(),
            furnace: FurnaceConfig::default(),
            prices: PriceConfig::default(),
            detection: DetectionConfig::default(),
        }
    }

    /// Returns the ROI preset: financial projection driven by an
    /// operator-expected saving percentage instead of the measured curves.
    pub fn roi() -> Self {
        Self {
            furnace: FurnaceConfig {
                expected_saving_pct: Some(5.0),
                ..FurnaceConfig::default()
            },
            ..Self::demo()
        }
    }

    /// Returns the forecast preset: savings evaluated over the prediction
    /// tail only.
    pub fn forecast() -> Self {
        Self {
            simulation: SimulationConfig {
                view: "forecast".to_string(),
                ..SimulationConfig::default()
            },
            ..Self::demo()
        }
    }

    /// Returns the anomaly preset: live/prediction split with deviation-zone
    /// detection over the live window.
    pub fn anomaly() -> Self {
        Self {
            simulation: SimulationConfig {
                view: "split".to_string(),
                ..SimulationConfig::default()
            },
            signal: SignalConfig {
                offset_mw: 1.2,
                ripple_amp_mw: 0.5,
                noise_std: 0.6,
                ..SignalConfig::default()
            },
            ..Self::demo()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["demo", "roi", "forecast", "anomaly"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "demo" => Ok(Self::demo()),
            "roi" => Ok(Self::roi()),
            "forecast" => Ok(Self::forecast()),
            "anomaly" => Ok(Self::anomaly()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.duration_min == 0 {
            errors.push(ConfigError {
                field: "simulation.duration_min".into(),
                message: "must be > 0".into(),
            });
        }
        if s.samples_per_min == 0 {
            errors.push(ConfigError {
                field: "simulation.samples_per_min".into(),
                message: "must be > 0".into(),
            });
        }
        if !matches!(s.view.as_str(), "combined" | "split" | "forecast") {
            errors.push(ConfigError {
                field: "simulation.view".into(),
                message: format!(
                    "must be \"combined\", \"split\", or \"forecast\", got \"{}\"",
                    s.view
                ),
            });
        }
        if s.view == "forecast" && s.prediction_min == 0 {
            errors.push(ConfigError {
                field: "simulation.prediction_min".into(),
                message: "must be > 0 when view is \"forecast\"".into(),
            });
        }

        let sig = &self.signal;
        if !matches!(sig.model.as_str(), "corrected" | "independent" | "smooth") {
            errors.push(ConfigError {
                field: "signal.model".into(),
                message: format!(
                    "must be \"corrected\", \"independent\", or \"smooth\", got \"{}\"",
                    sig.model
                ),
            });
        }
        if sig.center_mw <= 0.0 {
            errors.push(ConfigError {
                field: "signal.center_mw".into(),
                message: "must be > 0".into(),
            });
        }
        if sig.noise_std < 0.0 {
            errors.push(ConfigError {
                field: "signal.noise_std".into(),
                message: "must be >= 0".into(),
            });
        }
        if sig.base_noise_std < 0.0 {
            errors.push(ConfigError {
                field: "signal.base_noise_std".into(),
                message: "must be >= 0".into(),
            });
        }

        let fu = &self.furnace;
        if fu.tap_weight_tons <= 0.0 {
            errors.push(ConfigError {
                field: "furnace.tap_weight_tons".into(),
                message: "must be > 0".into(),
            });
        }
        if fu.heats_per_day == 0 {
            errors.push(ConfigError {
                field: "furnace.heats_per_day".into(),
                message: "must be > 0".into(),
            });
        }
        if !(1..=31).contains(&fu.days_per_month) {
            errors.push(ConfigError {
                field: "furnace.days_per_month".into(),
                message: "must be in [1, 31]".into(),
            });
        }
        if fu.energy_baseline_kwh_per_ton <= 0.0 {
            errors.push(ConfigError {
                field: "furnace.energy_baseline_kwh_per_ton".into(),
                message: "must be > 0".into(),
            });
        }
        if let Some(pct) = fu.expected_saving_pct
            && !(0.0..=100.0).contains(&pct)
        {
            errors.push(ConfigError {
                field: "furnace.expected_saving_pct".into(),
                message: "must be in [0.0, 100.0]".into(),
            });
        }
        if fu.hot_heel_tons < 0.0 || fu.hot_heel_tons >= fu.tap_weight_tons {
            errors.push(ConfigError {
                field: "furnace.hot_heel_tons".into(),
                message: "must be >= 0 and < furnace.tap_weight_tons".into(),
            });
        }

        let p = &self.prices;
        if p.electricity_price_kwh < 0.0 {
            errors.push(ConfigError {
                field: "prices.electricity_price_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.software_cost < 0.0 {
            errors.push(ConfigError {
                field: "prices.software_cost".into(),
                message: "must be >= 0".into(),
            });
        }

        let d = &self.detection;
        if d.deviation_threshold_mw <= 0.0 {
            errors.push(ConfigError {
                field: "detection.deviation_threshold_mw".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
