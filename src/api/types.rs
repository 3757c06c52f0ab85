//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;
use crate::sim::finance::FinancialSummary;
use crate::sim::heat::HeatBalance;
use crate::sim::savings::SavingsReport;
use crate::sim::segments::Segment;

/// Combined state response: config, summaries, and detected zones.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// Scenario configuration.
    pub config: ScenarioConfig,
    /// Savings summary for the analysis window.
    pub savings: SavingsSummary,
    /// Monthly financial projection.
    pub financial: FinancialSummary,
    /// Per-heat energy balance.
    pub heat: HeatBalance,
    /// Savings zones, grid-indexed.
    pub savings_zones: Vec<Segment>,
    /// Anomaly zones over the live window, grid-indexed.
    pub anomaly_zones: Vec<Segment>,
}

/// Scalar savings figures without the per-sample curve.
#[derive(Debug, Serialize)]
pub struct SavingsSummary {
    /// Trapezoidal integral of the savings curve (MW·min).
    pub total_saved_mw_min: f32,
    /// The same figure in megawatt-hours.
    pub total_saved_mwh: f32,
    /// Mean savings as a percentage of mean baseline power.
    pub saving_pct: f32,
    /// Number of samples in the analysis window.
    pub samples: usize,
}

impl From<&SavingsReport> for SavingsSummary {
    fn from(report: &SavingsReport) -> Self {
        Self {
            total_saved_mw_min: report.total_saved_mw_min,
            total_saved_mwh: report.total_saved_mwh(),
            saving_pct: report.saving_pct,
            samples: report.savings_mw.len(),
        }
    }
}

/// Optional range query parameters for the rows endpoint.
#[derive(Debug, Deserialize)]
pub struct RowsQuery {
    /// Start sample index (inclusive).
    pub from: Option<usize>,
    /// End sample index (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_summary_from_report() {
        let report =
            SavingsReport::from_curves(&[92.0, 92.0, 92.0], &[91.0, 91.0, 91.0], &[0.0, 1.0, 2.0]);
        let summary = SavingsSummary::from(&report);
        assert_eq!(summary.samples, 3);
        assert!((summary.total_saved_mw_min - 2.0).abs() < 1e-5);
        assert!((summary.total_saved_mwh - 2.0 / 60.0).abs() < 1e-6);
    }
}
