//! Scenario pipeline: curves, savings, zones, financial projection, rows.

use crate::config::ScenarioConfig;
use crate::io::export::{Phase, ReportRow};
use crate::sim::engine::SignalGenerator;
use crate::sim::finance::FinancialSummary;
use crate::sim::heat::HeatBalance;
use crate::sim::savings::SavingsReport;
use crate::sim::segments::{Segment, deviation_mask, find_segments, savings_mask};
use crate::sim::types::{AnalysisView, CurveSet};

/// Everything one scenario evaluation produces.
pub struct ScenarioResult {
    /// Generated curves and their grid.
    pub curves: CurveSet,
    /// Analysis window the savings were computed over.
    pub view: AnalysisView,
    /// Pointwise and integrated savings for the analysis window.
    pub savings: SavingsReport,
    /// Contiguous zones where the baseline exceeds the optimized curve,
    /// grid-indexed.
    pub savings_zones: Vec<Segment>,
    /// Zones in the live window deviating from its mean beyond the
    /// configured threshold, grid-indexed.
    pub anomaly_zones: Vec<Segment>,
    /// Monthly financial projection.
    pub financial: FinancialSummary,
    /// Per-heat energy balance.
    pub heat: HeatBalance,
    /// Export rows, one per grid sample.
    pub rows: Vec<ReportRow>,
}

/// Evaluates a scenario from scratch.
///
/// Every call re-generates the curves and re-derives all downstream results;
/// nothing is cached between invocations. The configuration is expected to
/// have passed [`ScenarioConfig::validate`].
pub fn run_scenario(config: &ScenarioConfig) -> ScenarioResult {
    let view = AnalysisView::parse(&config.simulation.view).unwrap_or(AnalysisView::Combined);

    let mut generator = SignalGenerator::from_config(config);
    let curves = generator.run();

    let window = curves.analysis_range(view);
    let baseline = &curves.baseline_mw[window.clone()];
    let optimized = &curves.optimized_mw[window.clone()];
    let time = &curves.time.values()[window.clone()];

    let savings = SavingsReport::from_curves(baseline, optimized, time);

    let min_len = config.detection.min_run_len;
    let savings_zones = offset_segments(
        find_segments(&savings_mask(baseline, optimized), min_len),
        window.start,
    );

    // Anomalies are judged against the live window only; the prediction
    // tail has no observed data to deviate from.
    let live = &curves.baseline_mw[curves.live_range()];
    let anomaly_zones = find_segments(
        &deviation_mask(live, config.detection.deviation_threshold_mw),
        min_len,
    );

    let saving_pct = config
        .furnace
        .expected_saving_pct
        .unwrap_or(savings.saving_pct);
    let financial = FinancialSummary::project(&config.furnace, &config.prices, saving_pct);
    let heat = HeatBalance::from_config(&config.furnace);

    let rows = build_rows(&curves, view, &savings);

    ScenarioResult {
        curves,
        view,
        savings,
        savings_zones,
        anomaly_zones,
        financial,
        heat,
        rows,
    }
}

fn offset_segments(segments: Vec<Segment>, offset: usize) -> Vec<Segment> {
    segments
        .into_iter()
        .map(|s| Segment {
            start: s.start + offset,
            end: s.end + offset,
        })
        .collect()
}

/// Builds one export row per grid sample. Cells outside the analysis window
/// are missing, not zero.
fn build_rows(curves: &CurveSet, view: AnalysisView, savings: &SavingsReport) -> Vec<ReportRow> {
    let window = curves.analysis_range(view);
    let time = curves.time.values();

    (0..curves.len())
        .map(|i| {
            let in_window = window.contains(&i);
            ReportRow {
                time_min: time[i],
                phase: if i < curves.live_end {
                    Phase::Live
                } else {
                    Phase::Prediction
                },
                baseline_mw: in_window.then(|| curves.baseline_mw[i]),
                optimized_mw: in_window.then(|| curves.optimized_mw[i]),
                savings_mw: in_window.then(|| savings.savings_mw[i - window.start]),
            }
        })
        .collect()
}
