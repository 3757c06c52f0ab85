//! Financial projection: monthly savings and payback period.

use std::fmt;

use serde::Serialize;

use crate::config::{FurnaceConfig, PriceConfig};

/// Monthly production, energy and cost impact of the given saving rate.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    /// Saving percentage the projection was computed from.
    pub saving_pct: f32,
    /// Monthly production (tons).
    pub monthly_tons: f32,
    /// Monthly baseline energy use (kWh).
    pub monthly_baseline_kwh: f32,
    /// Monthly energy saved (kWh).
    pub monthly_saved_kwh: f32,
    /// Monthly monetary savings (currency).
    pub monthly_savings: f32,
    /// Payback period in months; infinite when monthly savings are not
    /// positive.
    pub roi_months: f32,
}

impl FinancialSummary {
    /// Projects monthly impact from furnace throughput, prices and a saving
    /// percentage.
    ///
    /// Inputs are assumed validated non-negative (see
    /// [`crate::config::ScenarioConfig::validate`]); the projection itself
    /// never fails. Zero or negative savings yield an infinite payback
    /// sentinel, not an error.
    pub fn project(furnace: &FurnaceConfig, prices: &PriceConfig, saving_pct: f32) -> Self {
        let monthly_tons =
            furnace.tap_weight_tons * furnace.heats_per_day as f32 * furnace.days_per_month as f32;
        let monthly_baseline_kwh = monthly_tons * furnace.energy_baseline_kwh_per_ton;
        let monthly_saved_kwh = monthly_baseline_kwh * (saving_pct / 100.0);
        let monthly_savings = monthly_saved_kwh * prices.electricity_price_kwh;

        let roi_months = if monthly_savings > 0.0 {
            prices.software_cost / monthly_savings
        } else {
            f32::INFINITY
        };

        Self {
            saving_pct,
            monthly_tons,
            monthly_baseline_kwh,
            monthly_saved_kwh,
            monthly_savings,
            roi_months,
        }
    }

    /// Whether the investment pays back at all.
    pub fn pays_back(&self) -> bool {
        self.roi_months.is_finite()
    }
}

impl fmt::Display for FinancialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Investment Return ---")?;
        writeln!(f, "Saving rate:        {:.1}%", self.saving_pct)?;
        writeln!(f, "Production:         {:.0} tons/month", self.monthly_tons)?;
        writeln!(
            f,
            "Baseline energy:    {:.0} kWh/month",
            self.monthly_baseline_kwh
        )?;
        writeln!(
            f,
            "Energy saved:       {:.0} kWh/month",
            self.monthly_saved_kwh
        )?;
        writeln!(f, "Monthly savings:    {:.2}", self.monthly_savings)?;
        if self.pays_back() {
            write!(f, "Payback:            {:.1} months", self.roi_months)
        } else {
            write!(f, "Payback:            n/a (no savings)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        // 145 t x 8 heats x 26 days, 296 kWh/t, 5%, 0.10/kWh, 200k cost
        let furnace = FurnaceConfig::default();
        let prices = PriceConfig::default();
        let summary = FinancialSummary::project(&furnace, &prices, 5.0);

        assert!((summary.monthly_tons - 30_160.0).abs() < 1.0);
        assert!((summary.monthly_baseline_kwh - 8_927_360.0).abs() < 10.0);
        assert!((summary.monthly_saved_kwh - 446_368.0).abs() < 1.0);
        assert!((summary.monthly_savings - 44_636.80).abs() < 0.5);
        assert!((summary.roi_months - 4.48).abs() < 0.01);
    }

    #[test]
    fn zero_savings_means_infinite_payback() {
        let summary =
            FinancialSummary::project(&FurnaceConfig::default(), &PriceConfig::default(), 0.0);
        assert!(summary.roi_months.is_infinite());
        assert!(!summary.pays_back());
    }

    #[test]
    fn free_electricity_means_infinite_payback() {
        let prices = PriceConfig {
            electricity_price_kwh: 0.0,
            ..PriceConfig::default()
        };
        let summary = FinancialSummary::project(&FurnaceConfig::default(), &prices, 5.0);
        assert!(summary.roi_months.is_infinite());
    }

    #[test]
    fn payback_is_finite_iff_savings_positive() {
        for pct in [0.0, 0.5, 2.0, 10.0] {
            let summary =
                FinancialSummary::project(&FurnaceConfig::default(), &PriceConfig::default(), pct);
            assert_eq!(summary.pays_back(), summary.monthly_savings > 0.0);
        }
    }

    #[test]
    fn infinite_payback_renders_as_na() {
        let summary =
            FinancialSummary::project(&FurnaceConfig::default(), &PriceConfig::default(), 0.0);
        let text = format!("{summary}");
        assert!(text.contains("n/a"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn finite_payback_renders_numerically() {
        let summary =
            FinancialSummary::project(&FurnaceConfig::default(), &PriceConfig::default(), 5.0);
        let text = format!("{summary}");
        assert!(text.contains("4.5 months"));
    }
}
