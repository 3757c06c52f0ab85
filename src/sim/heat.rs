//! Per-heat energy balance: predicted specific energy and power-on time.

use std::fmt;

use serde::Serialize;

use crate::config::FurnaceConfig;

/// Heat contribution of charged lime (kWh per kg, via slag formation).
const LIME_KWH_PER_KG: f32 = 0.4;
/// Heat contribution of charged dolomite (kWh per kg, via slag formation).
const DOLOMITE_KWH_PER_KG: f32 = 0.3;
/// Chemical energy of natural gas (kWh per m³).
const GAS_KWH_PER_M3: f32 = 9.0;
/// Chemical energy of injected carbon (kWh per kg).
const CARBON_KWH_PER_KG: f32 = 2.0;
/// Electrical-demand factor when enough burners share the load.
const BURNER_FACTOR: f32 = 0.9;
/// Burner count at which the reduced factor applies.
const BURNER_THRESHOLD: u32 = 5;
/// Power-on time reduction under optimization (minutes).
const POWER_ON_REDUCTION_MIN: f32 = 2.0;
/// Floor below which power-on time is not projected to drop (minutes).
const POWER_ON_FLOOR_MIN: f32 = 28.0;

/// Predicted optimized energy figures for one heat.
#[derive(Debug, Clone, Serialize)]
pub struct HeatBalance {
    /// Net electrical energy per heat after credits and debits (kWh).
    pub net_energy_kwh: f32,
    /// Predicted optimized specific energy (kWh/ton).
    pub optimized_kwh_per_ton: f32,
    /// Predicted optimized power-on time (minutes).
    pub optimized_power_on_min: f32,
}

impl HeatBalance {
    /// Evaluates the balance for the given furnace setup.
    ///
    /// The hot heel carries melt energy into the next heat (credit), slag
    /// formers add a small demand, and gas plus injected carbon displace
    /// electrical input. A full burner complement shaves a further tenth off
    /// the electrical demand.
    pub fn from_config(furnace: &FurnaceConfig) -> Self {
        let base_kwh = furnace.tap_weight_tons * furnace.energy_baseline_kwh_per_ton;
        let hot_heel_kwh = furnace.hot_heel_tons * furnace.energy_baseline_kwh_per_ton;
        let slag_kwh = furnace.tap_weight_tons
            * (furnace.lime_kg_per_ton * LIME_KWH_PER_KG
                + furnace.dolomite_kg_per_ton * DOLOMITE_KWH_PER_KG)
            / 1000.0;
        let chemical_kwh = furnace.tap_weight_tons
            * (furnace.nat_gas_m3_per_ton * GAS_KWH_PER_M3
                + furnace.carbon_kg_per_ton * CARBON_KWH_PER_KG);

        let burner_factor = if furnace.burners >= BURNER_THRESHOLD {
            BURNER_FACTOR
        } else {
            1.0
        };

        let net_energy_kwh = (base_kwh - hot_heel_kwh + slag_kwh - chemical_kwh) * burner_factor;
        let optimized_kwh_per_ton = net_energy_kwh / furnace.tap_weight_tons;
        let optimized_power_on_min =
            (furnace.power_on_time_min - POWER_ON_REDUCTION_MIN).max(POWER_ON_FLOOR_MIN);

        Self {
            net_energy_kwh,
            optimized_kwh_per_ton,
            optimized_power_on_min,
        }
    }
}

impl fmt::Display for HeatBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Heat Balance ---")?;
        writeln!(
            f,
            "Optimized energy:   {:.2} kWh/ton",
            self.optimized_kwh_per_ton
        )?;
        write!(
            f,
            "Power-on time:      {:.1} min",
            self.optimized_power_on_min
        )
    }
}
